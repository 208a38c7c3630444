use conductor_core::followup;
use conductor_core::project;
use conductor_hooks_sdk::HookReadError;
use conductor_hooks_sdk::StopPayload;
use conductor_hooks_sdk::read_payload_from_stdin;

/// Entry point for the `stop` hook binary.
///
/// Malformed JSON on stdin degrades to a no-op reply with a diagnostic
/// on stderr; stdin read failures propagate.
pub fn run_main() -> anyhow::Result<()> {
    crate::init_logging();

    let payload = match read_payload_from_stdin::<StopPayload>() {
        Ok(payload) => payload,
        Err(err @ HookReadError::Json(_)) => {
            eprintln!("[conductor] stop: Failed to parse input: {err}");
            println!("{{}}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    tracing::debug!(
        status = ?payload.status,
        loop_count = ?payload.loop_count,
        "stop hook payload parsed",
    );

    let response = followup::stop_response(
        &payload,
        project::conductor_active_from_env(),
        &project::project_root_from_env(),
    );
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
