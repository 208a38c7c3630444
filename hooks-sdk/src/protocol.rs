use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Payload delivered to the `stop` hook when an agent loop ends.
///
/// Only the fields the hook consumes are modeled; hosts are free to send
/// more and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopPayload {
    pub status: Option<String>,
    pub loop_count: Option<u64>,
    pub transcript_path: Option<String>,
}

/// Reply to a `sessionStart` hook invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStartResponse {
    /// Whether the host should proceed with the session. Hooks that only
    /// report context never block, so this stays `true`.
    #[serde(rename = "continue")]
    pub continue_session: bool,
    /// Environment variables the host exports to later hook invocations
    /// in the same session.
    pub env: BTreeMap<String, String>,
    /// Markdown injected into the conversation context.
    pub additional_context: String,
}

impl SessionStartResponse {
    pub fn new() -> Self {
        Self {
            continue_session: true,
            env: BTreeMap::new(),
            additional_context: String::new(),
        }
    }
}

impl Default for SessionStartResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Reply to a `stop` hook invocation. Serializes to `{}` unless a
/// follow-up message is attached.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StopResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup_message: Option<String>,
}

impl StopResponse {
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn followup(message: String) -> Self {
        Self {
            followup_message: Some(message),
        }
    }
}
