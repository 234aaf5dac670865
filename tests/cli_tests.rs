//! CLI integration tests for the `qsieve` binary.
//!
//! These exercise the command-line interface using `assert_cmd`, which
//! spawns the compiled binary as a subprocess and asserts on exit code,
//! stdout, and stderr.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test cli_tests
//! ```

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn qsieve() -> Command {
    Command::cargo_bin("qsieve").unwrap()
}

/// Help text lists all three search subcommands.
#[test]
fn help_shows_all_subcommands() {
    qsieve().arg("--help").assert().success().stdout(
        predicate::str::contains("plain")
            .and(predicate::str::contains("twin"))
            .and(predicate::str::contains("safe")),
    );
}

/// `plain` with count=1 on a known-prime Q0 prints exactly its hex value.
#[test]
fn plain_single_survivor_from_known_prime() {
    qsieve()
        .args(["plain", "0x65", "--count", "1"]) // 101, prime
        .assert()
        .success()
        .stdout(predicate::str::diff("65\n"));
}

/// `--digest` appends one `sha512:`-prefixed line after the survivors.
#[test]
fn digest_flag_appends_sha512_line() {
    let output = qsieve()
        .args(["--digest", "plain", "0x65", "--count", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "expected 3 survivors + 1 digest line, got {lines:?}");
    assert!(lines[3].starts_with("sha512:"));
}

/// Malformed hex input is rejected with a non-zero exit code.
#[test]
fn malformed_hex_is_rejected() {
    qsieve()
        .args(["plain", "0xZZ", "--count", "1"])
        .assert()
        .failure();
}

/// An invalid `--table-size` is rejected.
#[test]
fn invalid_table_size_is_rejected() {
    qsieve()
        .args(["--table-size", "123", "plain", "0x65", "--count", "1"])
        .assert()
        .failure();
}

/// `twin` and `safe` subcommands both run to completion on a small Q0.
#[test]
fn twin_and_safe_subcommands_run() {
    qsieve().args(["twin", "0x05", "--count", "1"]).assert().success();
    qsieve().args(["safe", "0x0B", "--count", "1"]).assert().success();
}
