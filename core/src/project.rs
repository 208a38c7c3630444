use std::env;
use std::path::PathBuf;

/// Set by the host to the workspace root for every hook invocation.
pub const PROJECT_DIR_ENV: &str = "CURSOR_PROJECT_DIR";

/// Exported by the session-start hook: "true" when the marker directory exists.
pub const CONDUCTOR_ACTIVE_ENV: &str = "CONDUCTOR_ACTIVE";

/// Exported by the session-start hook: absolute path of the marker directory.
pub const CONDUCTOR_DIR_ENV: &str = "CONDUCTOR_DIR";

pub const TRACKS_PENDING_ENV: &str = "CONDUCTOR_TRACKS_PENDING";
pub const TRACKS_IN_PROGRESS_ENV: &str = "CONDUCTOR_TRACKS_IN_PROGRESS";
pub const TRACKS_COMPLETED_ENV: &str = "CONDUCTOR_TRACKS_COMPLETED";

/// Name of the marker directory looked up under the project root.
pub const CONDUCTOR_DIR_NAME: &str = "conductor";

/// Resolve the project root from the host environment, defaulting to the
/// current directory when the variable is unset.
pub fn project_root_from_env() -> PathBuf {
    env::var_os(PROJECT_DIR_ENV).map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Whether an earlier session-start hook switched conductor mode on.
pub fn conductor_active_from_env() -> bool {
    matches!(env::var(CONDUCTOR_ACTIVE_ENV), Ok(value) if value == "true")
}
