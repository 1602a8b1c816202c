//! End-to-end CLI tests
//!
//! These run the compiled binary with assert_cmd and check stdout, stderr
//! and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("evenfreq").unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_prints_yes_for_one_flake() {
    cmd()
        .arg("check")
        .write_stdin("aabbc\n")
        .assert()
        .success()
        .stdout("YES\n");
}

#[test]
fn check_prints_no_for_two_flakes() {
    cmd()
        .arg("check")
        .write_stdin("aabbcd\n")
        .assert()
        .success()
        .stdout("NO\n");
}

#[test]
fn check_reads_only_first_line() {
    cmd()
        .arg("check")
        .write_stdin("hi\naabbcd\n")
        .assert()
        .success()
        .stdout("YES\n");
}

#[test]
fn check_accepts_unterminated_line() {
    cmd()
        .arg("check")
        .write_stdin("h")
        .assert()
        .success()
        .stdout("YES\n");
}

#[test]
fn check_strips_crlf() {
    cmd()
        .arg("check")
        .write_stdin("aaaaaahhhhhhii\r\n")
        .assert()
        .success()
        .stdout("NO\n");
}

#[test]
fn check_json_output() {
    cmd()
        .args(["check", "--output-format", "json"])
        .write_stdin("hhhhhiiiiiz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"YES\""));
}

#[test]
fn check_empty_input_is_input_error() {
    cmd()
        .arg("check")
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Invalid input"));
}

#[test]
fn check_blank_line_is_input_error() {
    cmd().arg("check").write_stdin("\n").assert().code(2);
}

#[test]
fn check_rejects_bad_alphabet() {
    cmd()
        .arg("check")
        .write_stdin("hi^\n")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'^'"));
}

#[test]
fn check_rejects_oversized_input() {
    let input = format!("{}\n", "a".repeat(100_001));
    cmd()
        .arg("check")
        .write_stdin(input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("maximum is 100000"));
}

#[test]
fn check_json_error_envelope_carries_reason() {
    cmd()
        .args(["check", "--output-format", "json"])
        .write_stdin("abzzC\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"exit_code\": 2"))
        .stderr(predicate::str::contains("\"status\": \"bad_alphabet\""));
}

#[test]
fn check_missing_file_is_runtime_error() {
    cmd()
        .args(["check", "--input", "/nonexistent/evenfreq-input.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn invalid_output_format_is_input_error() {
    cmd()
        .args(["check", "--output-format", "yaml"])
        .write_stdin("aabbc\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid output_format"));
}

// =============================================================================
// explain
// =============================================================================

#[test]
fn explain_text_output() {
    cmd()
        .args(["explain", "--output-format", "text"])
        .write_stdin("aabbcd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frequencies: a=2 b=2 c=1 d=1"))
        .stdout(predicate::str::contains("Removals: 2"))
        .stdout(predicate::str::contains("Verdict: NO"));
}

#[test]
fn explain_json_is_parseable() {
    let output = cmd()
        .arg("explain")
        .write_stdin("aaaaaahhhhhhiiiii\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["removals"], 2);
    assert_eq!(json["target"]["char"], "i");
    assert_eq!(json["verdict"], "NO");
}

#[test]
fn verbose_logs_to_stderr_only() {
    cmd()
        .args(["check", "--verbose"])
        .env_remove("RUST_LOG")
        .write_stdin("aabbc\n")
        .assert()
        .success()
        .stdout("YES\n")
        .stderr(predicate::str::contains("DEBUG"));
}
