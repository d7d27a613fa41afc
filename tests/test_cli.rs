// CLI integration tests for quadhash
// Tests the command-line interface functionality

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run the binary with an empty XDG_CONFIG_HOME so no user config leaks in.
fn quadhash(args: &[&str]) -> (Output, TempDir) {
    let config_home = TempDir::new().expect("failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_quadhash"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");
    (output, config_home)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Test that --help flag shows help message with program description
#[test]
fn test_help_flag_shows_help_message() {
    let (output, _home) = quadhash(&["--help"]);
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "Help should exit with success");
    assert!(
        stdout.contains("quadhash"),
        "Help should contain program name. Got: {}",
        stdout
    );
    for command in ["hash", "explain", "verify"] {
        assert!(
            stdout.contains(command),
            "Help should list the {} subcommand. Got: {}",
            command,
            stdout
        );
    }
}

#[test]
fn test_hash_prints_one_digest_per_argument() {
    let (output, _home) = quadhash(&["hash", "hello", "z", ""]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "e85b753388878edf\n9ea31825cfea0400\n0000000000000000\n"
    );
}

#[test]
fn test_hash_reads_stdin_lines_without_arguments() {
    let config_home = TempDir::new().expect("failed to create temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_quadhash"))
        .arg("hash")
        .env("XDG_CONFIG_HOME", config_home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"hello\nabc\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait on child");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "e85b753388878edf\n509799395be50e04\n");
}

#[test]
fn test_reject_degenerate_flag_fails_on_short_input() {
    let (output, _home) = quadhash(&["--reject-degenerate", "hash", "hello", "a"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "degenerate input should fail");
    assert_eq!(stdout_of(&output), "e85b753388878edf\n");
    assert!(
        stderr.contains("Degenerate input"),
        "stderr should explain the failure. Got: {}",
        stderr
    );
}

#[test]
fn test_code_unit_flag_switches_to_unicode_scalars() {
    let (output, _home) = quadhash(&["--code-unit", "char", "hash", "héllo"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "ef5939465fb74c0b\n");
}

#[test]
fn test_explain_prints_trace_json() {
    let (output, _home) = quadhash(&["explain", "abc"]);
    assert!(output.status.success());

    let trace: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("explain should print JSON");
    assert_eq!(trace["packed"], 979_899);
    assert_eq!(trace["quad"], 169);
    assert_eq!(trace["digest"], "509799395be50e04");
}

#[test]
fn test_verify_accepts_matching_digest() {
    let (output, _home) = quadhash(&["verify", "hello", "E85B753388878EDF"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "OK\n");
}

#[test]
fn test_verify_reports_mismatch() {
    let (output, _home) = quadhash(&["verify", "hello", "0000000000000000"]);

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "MISMATCH e85b753388878edf\n");
}

#[test]
fn test_verify_rejects_malformed_digest() {
    let (output, _home) = quadhash(&["verify", "hello", "xyz"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Invalid digest"), "Got: {}", stderr);
}

#[test]
fn test_config_file_sets_options() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("strict.toml");
    std::fs::write(&path, "degenerate = \"reject\"\n").expect("failed to write config");

    let (output, _home) = quadhash(&["--config", path.to_str().unwrap(), "hash", ""]);
    assert!(!output.status.success());
}

#[test]
fn test_user_config_is_picked_up_from_xdg_config_home() {
    let config_home = TempDir::new().expect("failed to create temp dir");
    let config_dir = config_home.path().join("quadhash");
    std::fs::create_dir_all(&config_dir).expect("failed to create config dir");
    std::fs::write(config_dir.join("quadhash.toml"), "code-unit = \"char\"\n")
        .expect("failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_quadhash"))
        .args(["hash", "日本"])
        .env("XDG_CONFIG_HOME", config_home.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "c44aa284be93924d\n");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let (output, _home) = quadhash(&["--config", "/nonexistent/quadhash.toml", "hash", "x"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("config file not found"), "Got: {}", stderr);
}
