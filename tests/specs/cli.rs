//! Behavioral specs for the command line surface.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn bare_invocation_shows_help() {
    graphlint_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

#[test]
fn version_flag_prints_version() {
    graphlint_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn lint_help_lists_flags() {
    graphlint_cmd()
        .args(["lint", "--help"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("--path")
                .and(predicates::str::contains("--target"))
                .and(predicates::str::contains("--strict"))
                .and(predicates::str::contains("--fix")),
        );
}

#[test]
fn unknown_flag_fails() {
    graphlint_cmd()
        .args(["lint", "--unknown-flag"])
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unexpected|unknown|unrecognized)").unwrap());
}

#[test]
fn explicit_missing_config_is_config_error() {
    let temp = Project::with_graph();
    graphlint_cmd()
        .args(["-C", "missing.toml", "lint"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}
