use std::fs;
use std::io;
use std::path::Path;

use conductor_hooks_sdk::SessionStartResponse;

use crate::project;
use crate::track_file;
use crate::track_file::TrackCounts;

const WORKFLOW_BANNER: &str = "## Conductor Project Detected\n\
    This project uses the **Conductor** workflow framework for context-driven development.\n\
    The `conductor/` directory contains the project's product definition, tech stack, \
    workflow, and track-based implementation plans.\n";

const COMMANDS_SECTION: &str = "### Available Conductor Commands\n\
    - `/conductor-setup` - Initialize or resume project setup\n\
    - `/conductor-new-track` - Create a new track (feature/bug/chore)\n\
    - `/conductor-implement` - Execute tasks from the current track's plan\n\
    - `/conductor-status` - Show project progress overview\n\
    - `/conductor-review` - Review completed work against guidelines\n\
    - `/conductor-revert` - Git-aware revert of tracks/phases/tasks\n";

/// Build the session-start reply for a project root.
///
/// Missing or unreadable conductor documents never fail the reply; they
/// only reduce how much context it carries.
pub fn session_start_response(project_root: &Path) -> SessionStartResponse {
    let mut response = SessionStartResponse::new();
    let conductor_dir = project_root.join(project::CONDUCTOR_DIR_NAME);

    if !conductor_dir.is_dir() {
        response.env.insert(
            project::CONDUCTOR_ACTIVE_ENV.to_string(),
            "false".to_string(),
        );
        return response;
    }

    response.env.insert(
        project::CONDUCTOR_ACTIVE_ENV.to_string(),
        "true".to_string(),
    );
    let resolved = fs::canonicalize(&conductor_dir).unwrap_or_else(|_| conductor_dir.clone());
    response.env.insert(
        project::CONDUCTOR_DIR_ENV.to_string(),
        resolved.display().to_string(),
    );

    let mut parts = vec![WORKFLOW_BANNER.to_string()];

    match fs::read_to_string(conductor_dir.join("index.md")) {
        Ok(index) => parts.push(format!("### Project Index (`conductor/index.md`)\n{index}\n")),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => tracing::debug!("skipping conductor/index.md: {err}"),
    }

    if let Ok(tracks) = fs::read_to_string(conductor_dir.join("tracks.md")) {
        let counts = track_file::count_tracks_in_text(&tracks);
        response.env.insert(
            project::TRACKS_PENDING_ENV.to_string(),
            counts.pending.to_string(),
        );
        response.env.insert(
            project::TRACKS_IN_PROGRESS_ENV.to_string(),
            counts.in_progress.to_string(),
        );
        response.env.insert(
            project::TRACKS_COMPLETED_ENV.to_string(),
            counts.completed.to_string(),
        );
        if let Some(status) = track_status_section(counts) {
            parts.push(status);
        }
    }

    parts.push(COMMANDS_SECTION.to_string());
    response.additional_context = parts.join("\n");
    response
}

/// Status paragraph favoring in-progress work over a "ready to start" note.
fn track_status_section(counts: TrackCounts) -> Option<String> {
    let TrackCounts {
        pending,
        in_progress,
        completed,
    } = counts;
    if in_progress > 0 {
        Some(format!(
            "### Active Tracks\n\
             There are **{in_progress} track(s) in progress**, {pending} pending, and {completed} completed.\n\
             The user can invoke `/conductor-implement` to continue working on the current track, \
             or `/conductor-status` to see detailed progress.\n"
        ))
    } else if pending > 0 {
        Some(format!(
            "### Track Status\n\
             There are **{pending} pending track(s)** ready for implementation.\n\
             The user can invoke `/conductor-implement` to start working.\n"
        ))
    } else {
        None
    }
}
