mod protocol;

pub use protocol::*;

use std::io;
use std::io::Read;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookReadError {
    #[error("I/O error reading hook payload: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON hook payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read one hook payload from stdin.
///
/// The host writes the payload inline as a single JSON document and
/// closes the stream, so this consumes stdin to EOF before parsing.
pub fn read_payload_from_stdin<T: DeserializeOwned>() -> Result<T, HookReadError> {
    read_payload_from_reader(io::stdin())
}

pub fn read_payload_from_reader<T: DeserializeOwned, R: Read>(
    mut reader: R,
) -> Result<T, HookReadError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(serde_json::from_slice(&buf)?)
}
