//! CLI session integration tests
//!
//! These tests drive the `roster` binary through piped stdin and check the
//! console transcript and exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_roster(args: &[&str], script: &str) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_roster");

    let mut child = Command::new(cli_bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    child.wait_with_output().expect("Failed to wait for CLI")
}

#[test]
fn test_cli_end_to_end_session() {
    // Add Alice, update her, search, delete, search again, exit
    let script = "1\n1\nAlice\n50000\nEng\n\
                  4\n1\nAlicia\n55000\nEngineering\n\
                  3\n1\n\
                  5\n1\n\
                  3\n1\n\
                  6\n";

    let output = run_roster(&[], script);

    assert!(
        output.status.success(),
        "CLI should exit cleanly. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Employee added successfully!"));
    assert!(stdout.contains("Employee updated successfully!"));
    assert!(stdout.contains(
        "ID: 1\nName: Alicia\nSalary: $55000\nDepartment: Engineering\n--------------------------\n"
    ));
    assert!(stdout.contains("Employee deleted successfully!"));
    assert!(stdout.contains("Enter Employee ID to search: Employee not found!"));
    assert!(stdout.ends_with("Enter your choice: Exiting..."));
}

#[test]
fn test_cli_invalid_choice_then_exit() {
    let output = run_roster(&[], "8\n6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid choice!"));
    assert_eq!(stdout.matches("Employee Management System").count(), 2);
}

#[test]
fn test_cli_eof_exits_zero() {
    let output = run_roster(&[], "2\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No employees to display!"));
    assert!(!stdout.contains("Exiting..."));
}

#[test]
fn test_cli_logs_go_to_stderr_only() {
    let output = run_roster(&["--log-profile", "production"], "2\n6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!stdout.contains("list_employees"));
    assert!(stderr.contains("list_employees"));
    assert!(stderr.contains("ERR_EMPTY"));
}

#[test]
fn test_cli_rejects_unknown_log_profile() {
    let output = run_roster(&["--log-profile", "verbose"], "6\n");

    assert!(!output.status.success());
}
