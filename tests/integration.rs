//! Drives the built `sudoku-dlx` binary end to end against fixture files,
//! the way the CLI's external collaborators (argument handling, file I/O,
//! output formatting) are actually exercised in production.

use assert_cmd::Command;
use predicates::prelude::*;

const SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

#[test]
fn solves_every_puzzle_in_the_fixture_file() {
    let mut cmd = Command::cargo_bin("sudoku-dlx").unwrap();
    cmd.arg("tests/fixtures/puzzles.txt");

    let expected = format!("{SOLVED}\n{SOLVED}\n");
    cmd.assert().success().stdout(expected);
}

#[test]
fn malformed_line_exits_with_failure_and_reports_a_format_error() {
    let mut cmd = Command::cargo_bin("sudoku-dlx").unwrap();
    cmd.arg("tests/fixtures/malformed.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("IO Error: Format error"));
}

#[test]
fn missing_file_exits_with_failure_and_reports_no_such_file() {
    let mut cmd = Command::cargo_bin("sudoku-dlx").unwrap();
    cmd.arg("tests/fixtures/does-not-exist.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("IO Error: No such file"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("sudoku-dlx").unwrap();
    cmd.assert().failure().code(1);
}
