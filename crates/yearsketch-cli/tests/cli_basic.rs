//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command with stdin and return output.
fn run_cli(args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "yearsketch-cli", "--quiet", "--"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI command");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("Failed to run CLI command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

const ANSWERS: &str = r#"{
  "q1": { "selected": "found", "emoji": "🎯" },
  "q9": { "goal": "Run a marathon" }
}"#;

#[test]
fn report_renders_present_answers_only() {
    let (stdout, _stderr, code) = run_cli(&["report", "--locale", "en", "-"], ANSWERS);
    assert_eq!(code, 0);
    assert!(stdout.contains("🎯"));
    assert!(stdout.contains("Run a marathon"));
    assert!(!stdout.contains("🦋"));
}

#[test]
fn art_bear_renders_twenty_rows() {
    let (stdout, _stderr, code) = run_cli(&["art", "--shape", "bear", "-"], "{}");
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 20);
}

#[test]
fn art_rejects_unknown_shape() {
    let (_stdout, stderr, code) = run_cli(&["art", "--shape", "blob", "-"], "{}");
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown shape"));
}
