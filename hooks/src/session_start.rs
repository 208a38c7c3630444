use conductor_core::project;
use conductor_core::session_context;
use conductor_hooks_sdk::HookReadError;
use conductor_hooks_sdk::read_payload_from_stdin;
use serde_json::Value;

/// Entry point for the `sessionStart` hook binary.
///
/// Malformed JSON on stdin degrades to a minimal continue reply with a
/// diagnostic on stderr; the host must always get a usable decision.
/// Stdin read failures are the one hard error and propagate.
pub fn run_main() -> anyhow::Result<()> {
    crate::init_logging();

    // The payload carries nothing the reporter uses, but it still has to
    // be well-formed JSON.
    match read_payload_from_stdin::<Value>() {
        Ok(_) => {}
        Err(err @ HookReadError::Json(_)) => {
            eprintln!("[conductor] session-start: Failed to parse input: {err}");
            println!("{}", serde_json::json!({"continue": true}));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let response = session_context::session_start_response(&project::project_root_from_env());
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
