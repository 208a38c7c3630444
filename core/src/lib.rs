pub mod followup;
pub mod plan_file;
pub mod project;
pub mod session_context;
pub mod track_file;
pub mod transcript;
