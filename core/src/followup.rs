use std::fs;
use std::path::Path;

use conductor_hooks_sdk::StopPayload;
use conductor_hooks_sdk::StopResponse;

use crate::plan_file;
use crate::plan_file::TaskCounts;
use crate::project;
use crate::track_file;
use crate::transcript;

/// Decide whether a finished agent run should be continued.
///
/// A follow-up goes out only when the run completed normally, conductor
/// mode is active, the active track still has a pending task with a
/// non-empty label, and the transcript tail shows the session was
/// implementing the plan. Every other case is a no-op reply.
pub fn stop_response(
    payload: &StopPayload,
    conductor_active: bool,
    project_root: &Path,
) -> StopResponse {
    if payload.status.as_deref() != Some("completed") {
        return StopResponse::noop();
    }
    if !conductor_active {
        return StopResponse::noop();
    }

    let conductor_dir = project_root.join(project::CONDUCTOR_DIR_NAME);
    if !conductor_dir.is_dir() {
        return StopResponse::noop();
    }
    let Some(plan_path) = track_file::active_track_plan(&conductor_dir) else {
        return StopResponse::noop();
    };
    let Ok(plan) = fs::read_to_string(&plan_path) else {
        tracing::debug!("unreadable plan {}", plan_path.display());
        return StopResponse::noop();
    };

    let counts = plan_file::count_tasks_in_text(&plan);
    if counts.pending == 0 {
        return StopResponse::noop();
    }
    let Some(next_task) =
        plan_file::next_pending_task_in_text(&plan).filter(|label| !label.is_empty())
    else {
        return StopResponse::noop();
    };

    let is_implement = payload
        .transcript_path
        .as_deref()
        .is_some_and(|path| transcript::is_implement_session(Path::new(path)));
    if !is_implement {
        return StopResponse::noop();
    }

    StopResponse::followup(followup_message(counts, &next_task))
}

/// Render the continuation instruction for the next pending task.
pub fn followup_message(counts: TaskCounts, next_task: &str) -> String {
    let done = counts.done();
    let total = counts.total();
    format!(
        "Continue implementing the track. Progress: {done}/{total} tasks done. \
         Next task: \"{next_task}\". \
         Follow the Conductor workflow: read the task from plan.md, \
         mark it [~], implement following the workflow (TDD if applicable), \
         commit, record SHA, mark [x], then move to the next task."
    )
}
