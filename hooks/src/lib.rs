pub mod session_start;
pub mod stop;

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber for a hook process.
///
/// Hooks speak JSON on stdout, so diagnostics go to stderr and stay
/// silent unless `RUST_LOG` asks for them.
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
