use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

/// How much of the transcript tail is inspected for workflow markers.
pub const TRANSCRIPT_TAIL_BYTES: u64 = 8192;

const IMPLEMENT_MARKERS: [&str; 3] = ["conductor-implement", "conductor workflow", "plan.md"];

/// Whether the transcript tail shows the session was driving a track plan.
///
/// Only the last [`TRANSCRIPT_TAIL_BYTES`] of the file are read; markers
/// match case-insensitively. A missing or unreadable transcript counts
/// as "no".
pub fn is_implement_session(transcript_path: &Path) -> bool {
    read_tail(transcript_path, TRANSCRIPT_TAIL_BYTES)
        .is_ok_and(|tail| tail_has_implement_marker(&tail))
}

fn read_tail(path: &Path, max_bytes: u64) -> io::Result<String> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    file.seek(SeekFrom::Start(len.saturating_sub(max_bytes)))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn tail_has_implement_marker(tail: &str) -> bool {
    let lowered = tail.to_lowercase();
    IMPLEMENT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
