//! Behavioral specs for `graphlint lint`.
//!
//! Engine interaction is observed through a stub engine that records its
//! arguments (unix only).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use crate::prelude::*;

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn missing_graph_exits_with_graph_not_found() {
    let temp = Project::empty();
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains(
            "graphlint: The project's graph can not be found.",
        ));
}

#[test]
fn missing_path_reports_underlying_cause() {
    let temp = Project::empty();
    let missing = temp.path().join("missing");
    graphlint_cmd()
        .args(["lint", "--path", missing.to_str().unwrap()])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(
            predicates::str::contains("The project's graph can not be found.")
                .and(predicates::str::contains("caused by: no graph found")),
        );
}

#[test]
fn malformed_graph_is_graph_not_found() {
    let temp = Project::empty();
    temp.file("graph.json", "{ \"projects\": [");
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("The project's graph can not be found."));
}

#[test]
fn external_target_is_not_found() {
    let temp = Project::with_graph();
    graphlint_cmd()
        .args(["lint", "--target", "Vendor"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains(
            "A target with a name 'Vendor' not found in the project.",
        ));
}

#[test]
fn fixture_workspace_rejects_unknown_target() {
    let workspace = fixture("workspace");
    graphlint_cmd()
        .args(["lint", "--path", workspace.to_str().unwrap(), "--target", "Alamofire"])
        .current_dir(&workspace)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("'Alamofire' not found"));
}

#[test]
fn missing_engine_is_internal_error() {
    let temp = Project::with_graph();
    temp.config("[lint]\nprogram = \"graphlint-no-such-engine\"\n");
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to spawn graphlint-no-such-engine"));
}

// =============================================================================
// DISPATCH
// =============================================================================

#[cfg(unix)]
#[test]
fn lint_passes_all_internal_sources() {
    let temp = Project::with_graph();
    temp.fake_engine("");

    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        temp.engine_args().unwrap(),
        vec![
            "lint".to_string(),
            "--".to_string(),
            temp.source("a.swift"),
            temp.source("b.swift"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn strict_escalates_leniency() {
    let temp = Project::with_graph();
    temp.fake_engine("");

    graphlint_cmd()
        .args(["lint", "--strict", "--target", "App"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        temp.engine_args().unwrap(),
        vec![
            "lint".to_string(),
            "--strict".to_string(),
            "--".to_string(),
            temp.source("a.swift"),
            temp.source("b.swift"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn fix_runs_fix_without_strict() {
    let temp = Project::with_graph();
    temp.fake_engine("");

    graphlint_cmd()
        .args(["lint", "--fix", "--strict"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        temp.engine_args().unwrap(),
        vec![
            "lint".to_string(),
            "--fix".to_string(),
            "--".to_string(),
            temp.source("a.swift"),
            temp.source("b.swift"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn path_flag_sources_resolve_from_graph_directory() {
    let temp = Project::empty();
    temp.file("ios/graph.json", APP_AND_VENDOR_GRAPH);
    temp.file("ios/a.swift", "");
    temp.file("ios/b.swift", "");
    temp.fake_engine("");

    graphlint_cmd()
        .args(["lint", "--path", "ios"])
        .current_dir(temp.path())
        .assert()
        .success();

    let args = temp.engine_args().unwrap();
    assert_eq!(args, vec!["lint", "--", "ios/a.swift", "ios/b.swift"]);
    for source in &args[2..] {
        assert!(temp.path().join(source).is_file(), "{source} missing");
    }
}

#[cfg(unix)]
#[test]
fn absolute_path_flag_yields_absolute_sources() {
    let temp = Project::empty();
    temp.file("ios/graph.json", APP_AND_VENDOR_GRAPH);
    temp.file("ios/a.swift", "");
    temp.file("ios/b.swift", "");
    temp.fake_engine("");

    let root = temp.path().join("ios");
    graphlint_cmd()
        .args(["lint", "--path", root.to_str().unwrap(), "--target", "App"])
        .current_dir(temp.path())
        .assert()
        .success();

    let args = temp.engine_args().unwrap();
    assert_eq!(
        args[2..],
        [
            root.join("a.swift").to_string_lossy().into_owned(),
            root.join("b.swift").to_string_lossy().into_owned(),
        ]
    );
    assert!(args[2..].iter().all(|source| Path::new(source).is_file()));
}

#[cfg(unix)]
#[test]
fn engine_failure_exits_with_lint_failed() {
    let temp = Project::with_graph();
    temp.fake_engine("");

    graphlint_cmd()
        .arg("lint")
        .env("FAKE_LINT_EXIT", "2")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("exited with code 2"));
}

#[cfg(unix)]
#[test]
fn target_not_found_never_runs_engine() {
    let temp = Project::with_graph();
    temp.fake_engine("");

    graphlint_cmd()
        .args(["lint", "--target", "Missing"])
        .current_dir(temp.path())
        .assert()
        .code(2);

    assert_eq!(temp.engine_args(), None);
}
