//! Tests for the wwpass CLI help functionality

mod common;
use common::wwpass;

#[test]
fn test_no_args_shows_help() {
    let output = wwpass().output().expect("Failed to execute wwpass command");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for section in ["Usage:", "Commands:", "Options:"] {
        assert!(
            stdout.contains(section),
            "Output should contain '{}': {}",
            section,
            stdout
        );
    }
}

#[test]
fn test_help_lists_commands() {
    let output = wwpass()
        .arg("--help")
        .output()
        .expect("Failed to execute wwpass command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for command in ["ticket", "puid", "name", "data", "sp", "message"] {
        assert!(
            stdout.contains(command),
            "Help should list '{}': {}",
            command,
            stdout
        );
    }
}
