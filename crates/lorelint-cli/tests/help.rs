use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the lorelint binary.
#[allow(deprecated)]
fn lorelint_cmd() -> Command {
    Command::cargo_bin("lorelint").unwrap()
}

#[test]
fn help_works() {
    lorelint_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_names_the_artifacts() {
    lorelint_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report-out"))
        .stdout(predicate::str::contains("summary-out"));
}

#[test]
fn unknown_subcommand_fails() {
    lorelint_cmd().arg("frobnicate").assert().failure();
}
