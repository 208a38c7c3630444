use std::fs;
use std::path::Path;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::Deserialize;

/// Markdown link to a track's subdirectory, e.g. `[auth-flow/](./conductor/tracks/auth-flow/)`.
static TRACK_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+/)\]\(([^)]+)\)")
        .unwrap_or_else(|err| panic!("invalid track link regex: {err}"))
});

/// Checklist marker of one track bullet in the track-list document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackStatus {
    Pending,
    InProgress,
    Completed,
}

/// Totals per track status across the track-list document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Classify one track-list line by its checklist marker.
pub fn classify_track_line(line: &str) -> Option<TrackStatus> {
    let trimmed = line.trim();
    if trimmed.starts_with("- [ ] **Track:") {
        Some(TrackStatus::Pending)
    } else if trimmed.starts_with("- [~] **Track:") {
        Some(TrackStatus::InProgress)
    } else if trimmed.starts_with("- [x] **Track:") {
        Some(TrackStatus::Completed)
    } else {
        None
    }
}

/// Count track bullets by checklist status.
pub fn count_tracks_in_text(content: &str) -> TrackCounts {
    let mut counts = TrackCounts::default();
    for line in content.lines() {
        match classify_track_line(line) {
            Some(TrackStatus::Pending) => counts.pending = counts.pending.saturating_add(1),
            Some(TrackStatus::InProgress) => {
                counts.in_progress = counts.in_progress.saturating_add(1);
            }
            Some(TrackStatus::Completed) => counts.completed = counts.completed.saturating_add(1),
            None => {}
        }
    }
    counts
}

#[derive(Debug, Deserialize)]
struct TrackMetadata {
    status: Option<String>,
}

/// Locate the plan document of the track currently being worked on.
///
/// The track-list document is split on `---` dividers; the first section
/// holding an in-progress bullet and a directory link that resolves to an
/// existing `plan.md` wins. When the list yields nothing, the newest
/// `tracks/` subdirectory whose metadata is `in_progress` or `new` is
/// used instead. A missing or unreadable track-list document means no
/// active track, without consulting the fallback.
pub fn active_track_plan(conductor_dir: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(conductor_dir.join("tracks.md")).ok()?;
    let project_root = conductor_dir.parent()?;

    for section in content.split("---") {
        let in_progress = section
            .lines()
            .any(|line| classify_track_line(line) == Some(TrackStatus::InProgress));
        if !in_progress {
            continue;
        }
        let Some(captures) = TRACK_LINK.captures(section) else {
            continue;
        };
        let Some(target) = captures.get(2) else {
            continue;
        };
        let relative = target
            .as_str()
            .trim_end_matches('/')
            .trim_start_matches(['.', '/']);
        let plan_path = project_root.join(relative).join("plan.md");
        if plan_path.exists() {
            return Some(plan_path);
        }
    }

    fallback_track_plan(&conductor_dir.join("tracks"))
}

/// Scan track subdirectories in reverse name order for one whose metadata
/// still marks it as open.
fn fallback_track_plan(tracks_dir: &Path) -> Option<PathBuf> {
    let mut entries = fs::read_dir(tracks_dir)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .collect::<Vec<_>>();
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries.into_iter().rev() {
        let track_dir = entry.path();
        let plan = track_dir.join("plan.md");
        let metadata_path = track_dir.join("metadata.json");
        if !plan.exists() || !metadata_path.exists() {
            continue;
        }
        let Ok(raw) = fs::read_to_string(&metadata_path) else {
            continue;
        };
        let Ok(metadata) = serde_json::from_str::<TrackMetadata>(&raw) else {
            tracing::debug!("skipping {}: malformed metadata", track_dir.display());
            continue;
        };
        if matches!(metadata.status.as_deref(), Some("in_progress" | "new")) {
            return Some(plan);
        }
    }

    None
}
