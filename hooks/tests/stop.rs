use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;

use assert_cmd::Command;
use assert_cmd::cargo::CommandCargoExt;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

const EXPECTED_FOLLOWUP: &str = "Continue implementing the track. Progress: 1/3 tasks done. \
     Next task: \"Write the parser\". \
     Follow the Conductor workflow: read the task from plan.md, \
     mark it [~], implement following the workflow (TDD if applicable), \
     commit, record SHA, mark [x], then move to the next task.";

fn stop_cmd() -> Command {
    Command::cargo_bin("conductor-stop").expect("binary")
}

/// Project with one in-progress track, two open tasks, and a transcript
/// that names the implement command.
fn write_project(root: &Path) -> PathBuf {
    let track_dir = root.join("conductor").join("tracks").join("auth-flow");
    fs::create_dir_all(&track_dir).expect("track dir");
    fs::write(
        track_dir.join("plan.md"),
        "- [x] Task: Scaffold the crate\n- [ ] Task: Write the parser\n- [ ] Task: Wire the CLI\n",
    )
    .expect("write plan");
    fs::write(track_dir.join("metadata.json"), r#"{"status": "in_progress"}"#)
        .expect("write metadata");
    fs::write(
        root.join("conductor").join("tracks.md"),
        "- [~] **Track: Auth**\n  *Link: [auth-flow/](./conductor/tracks/auth-flow/)*\n",
    )
    .expect("write tracks");

    let transcript = root.join("transcript.md");
    fs::write(&transcript, "running /conductor-implement on the track\n")
        .expect("write transcript");
    transcript
}

fn stop_payload(status: &str, transcript: &Path) -> String {
    serde_json::json!({
        "status": status,
        "loop_count": 1,
        "transcript_path": transcript.display().to_string(),
    })
    .to_string()
}

#[test]
fn continues_an_implement_session() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let transcript = write_project(project.path());

    let output = stop_cmd()
        .env("CURSOR_PROJECT_DIR", project.path())
        .env("CONDUCTOR_ACTIVE", "true")
        .write_stdin(stop_payload("completed", &transcript))
        .output()?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response["followup_message"], EXPECTED_FOLLOWUP);

    Ok(())
}

#[test]
fn ignores_runs_that_did_not_complete() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let transcript = write_project(project.path());

    let output = stop_cmd()
        .env("CURSOR_PROJECT_DIR", project.path())
        .env("CONDUCTOR_ACTIVE", "true")
        .write_stdin(stop_payload("aborted", &transcript))
        .output()?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response, serde_json::json!({}));

    Ok(())
}

#[test]
fn requires_conductor_mode() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let transcript = write_project(project.path());

    for setup in [None, Some("false")] {
        let mut cmd = stop_cmd();
        cmd.env("CURSOR_PROJECT_DIR", project.path());
        match setup {
            None => cmd.env_remove("CONDUCTOR_ACTIVE"),
            Some(value) => cmd.env("CONDUCTOR_ACTIVE", value),
        };

        let output = cmd
            .write_stdin(stop_payload("completed", &transcript))
            .output()?;
        assert!(output.status.success());

        let response: Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(response, serde_json::json!({}));
    }

    Ok(())
}

#[test]
fn requires_a_trigger_in_the_transcript() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let transcript = write_project(project.path());
    fs::write(&transcript, "nothing workflow-related here\n")?;

    let output = stop_cmd()
        .env("CURSOR_PROJECT_DIR", project.path())
        .env("CONDUCTOR_ACTIVE", "true")
        .write_stdin(stop_payload("completed", &transcript))
        .output()?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response, serde_json::json!({}));

    Ok(())
}

#[test]
fn falls_back_to_track_metadata_without_a_link() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let transcript = write_project(project.path());
    // An in-progress bullet with no link forces the directory scan.
    fs::write(
        project.path().join("conductor").join("tracks.md"),
        "- [~] **Track: Auth**\n",
    )?;

    let output = stop_cmd()
        .env("CURSOR_PROJECT_DIR", project.path())
        .env("CONDUCTOR_ACTIVE", "true")
        .write_stdin(stop_payload("completed", &transcript))
        .output()?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response["followup_message"], EXPECTED_FOLLOWUP);

    Ok(())
}

#[test]
fn malformed_stdin_degrades_to_a_noop() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    write_project(project.path());

    for bad_input in ["{invalid", "[1, 2]", ""] {
        let assert = stop_cmd()
            .env("CURSOR_PROJECT_DIR", project.path())
            .env("CONDUCTOR_ACTIVE", "true")
            .write_stdin(bad_input)
            .assert()
            .success()
            .stderr(predicates::str::contains("Failed to parse input"));

        let response: Value = serde_json::from_slice(&assert.get_output().stdout)?;
        assert_eq!(response, serde_json::json!({}));
    }

    Ok(())
}

#[test]
fn stdin_read_failure_is_a_hard_error() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    write_project(project.path());

    // A directory opens fine but reading it fails, so the stdin read
    // itself errors out before any JSON is seen.
    let output = std::process::Command::cargo_bin("conductor-stop")?
        .env("CURSOR_PROJECT_DIR", project.path())
        .env("CONDUCTOR_ACTIVE", "true")
        .stdin(Stdio::from(fs::File::open(project.path())?))
        .output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error reading hook payload"));

    Ok(())
}
