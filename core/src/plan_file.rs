/// Checklist marker of one task line in a track plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

/// Totals per task status across one plan document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub skipped: usize,
}

impl TaskCounts {
    /// Tasks in any state, pending included.
    pub fn total(&self) -> usize {
        self.pending
            .saturating_add(self.in_progress)
            .saturating_add(self.completed)
            .saturating_add(self.skipped)
    }

    /// Tasks that no longer need work: completed plus skipped.
    pub fn done(&self) -> usize {
        self.completed.saturating_add(self.skipped)
    }
}

/// Classify one plan line by its checklist marker.
///
/// Matching is prefix-exact after trimming surrounding whitespace, and the
/// marker must be followed by a space: a bare `- [ ]` with no description
/// does not count.
pub fn classify_task_line(line: &str) -> Option<TaskStatus> {
    let trimmed = line.trim();
    if trimmed.starts_with("- [ ] ") {
        Some(TaskStatus::Pending)
    } else if trimmed.starts_with("- [~] ") {
        Some(TaskStatus::InProgress)
    } else if trimmed.starts_with("- [x] ") {
        Some(TaskStatus::Completed)
    } else if trimmed.starts_with("- [-] ") {
        Some(TaskStatus::Skipped)
    } else {
        None
    }
}

/// Count plan lines by checklist status.
pub fn count_tasks_in_text(content: &str) -> TaskCounts {
    let mut counts = TaskCounts::default();
    for line in content.lines() {
        match classify_task_line(line) {
            Some(TaskStatus::Pending) => counts.pending = counts.pending.saturating_add(1),
            Some(TaskStatus::InProgress) => {
                counts.in_progress = counts.in_progress.saturating_add(1);
            }
            Some(TaskStatus::Completed) => counts.completed = counts.completed.saturating_add(1),
            Some(TaskStatus::Skipped) => counts.skipped = counts.skipped.saturating_add(1),
            None => {}
        }
    }
    counts
}

/// Label of the first pending `Task:` line, if any.
///
/// The label may be empty when the line carries no description after the
/// prefix; callers that need a task name must treat an empty label as
/// absent.
pub fn next_pending_task_in_text(content: &str) -> Option<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        let label = trimmed
            .strip_prefix("- [ ] Task:")
            .or_else(|| trimmed.strip_prefix("- [ ] **Task:"));
        if let Some(label) = label {
            return Some(label.trim().trim_end_matches('*').trim().to_string());
        }
    }
    None
}
