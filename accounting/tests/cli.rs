//! CLI tests for the `accounting` binary.
//!
//! Spawns the binary inside a temp directory and checks exit codes and the
//! log files each command leaves behind.

use std::fs;
use std::process::Command;

use accounting::exit_codes;
use instrument::test_support::read_lines;

const FAST_CONFIG: &str = "[latency]\nemployees_ms = 0\npayroll_ms = 0\n";

fn accounting(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_accounting"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn accounting")
}

#[test]
fn task1_exits_ok_and_writes_main_log() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = accounting(temp.path(), &["task1"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let lines = read_lines(&temp.path().join("main.log"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn run_writes_main_and_default_sinks() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("accounting.toml"), FAST_CONFIG).expect("config");

    let output = accounting(temp.path(), &["run"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let main = read_lines(&temp.path().join("main_operations.log"));
    assert_eq!(main.len(), 1);
    assert!(main[0].contains("| SUCCESS | main() -> SUCCESS |"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Contents of"));
}

#[test]
fn self_check_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("accounting.toml"), FAST_CONFIG).expect("config");

    let output = accounting(temp.path(), &["self-check"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let calls = read_lines(&temp.path().join("accounting.log"));
    assert!(calls.iter().any(|line| line.contains("-> TypeMismatch: ")));
    assert!(calls.iter().any(|line| line.contains("-> InvalidValue: ")));
}

#[test]
fn invalid_config_exits_with_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("accounting.toml"),
        "slow_call_threshold_ms = 0\n",
    )
    .expect("config");

    let output = accounting(temp.path(), &["run"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("slow_call_threshold_ms"));
    assert!(!temp.path().join("main_operations.log").exists());
}

#[test]
fn config_write_creates_file_with_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = accounting(temp.path(), &["config", "--write", "--config", "custom.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let written = fs::read_to_string(temp.path().join("custom.toml")).expect("read");
    assert!(written.contains("default_sink = \"accounting.log\""));
    assert!(String::from_utf8_lossy(&output.stdout).contains("main_sink"));
}
