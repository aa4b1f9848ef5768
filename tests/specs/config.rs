//! Behavioral specs for graphlint.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::with_graph();
    temp.config("version = 9\n");
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

#[test]
fn unknown_key_warns() {
    let temp = Project::with_graph();
    temp.config("version = 1\nrules = []\n[lint]\nprogram = \"graphlint-no-such-engine\"\n");
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .stderr(predicates::str::contains("unrecognized field `rules`"));
}

#[test]
fn custom_graph_file_name() {
    let temp = Project::empty();
    temp.file("workspace-graph.json", APP_AND_VENDOR_GRAPH);
    temp.config("[graph]\nfile = \"workspace-graph.json\"\n");
    graphlint_cmd()
        .args(["lint", "--target", "Nope"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("'Nope' not found"));
}

#[cfg(unix)]
#[test]
fn configured_and_flag_options_reach_engine() {
    let temp = Project::with_graph();
    temp.fake_engine("configuration_files = [\".swiftlint.yml\"]\n");

    graphlint_cmd()
        .args(["lint", "--config-file", "ci.yml", "--quiet"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        temp.engine_args().unwrap(),
        vec![
            "lint",
            "--quiet",
            "--config",
            ".swiftlint.yml",
            "--config",
            "ci.yml",
            "--",
        ]
        .into_iter()
        .map(String::from)
        .chain([temp.source("a.swift"), temp.source("b.swift")])
        .collect::<Vec<_>>()
    );
}

#[cfg(unix)]
#[test]
fn graph_command_replaces_document() {
    let temp = Project::empty();
    temp.fake_engine("");
    // Re-write config with both sections; the dump command prints the graph.
    temp.file("dump.json", APP_AND_VENDOR_GRAPH);
    let script = temp.path().join("fake-lint");
    let dump = temp.path().join("dump.json");
    temp.config(&format!(
        "[graph]\ncommand = [\"cat\", '{}']\n[lint]\nprogram = '{}'\n",
        dump.display(),
        script.display()
    ));

    graphlint_cmd()
        .args(["lint", "--target", "App"])
        .current_dir(temp.path())
        .assert()
        .success();

    // Sources from a dump command are passed through as printed.
    assert_eq!(
        temp.engine_args().unwrap(),
        vec!["lint", "--", "a.swift", "b.swift"]
    );
}

#[test]
fn unknown_section_key_warns() {
    let temp = Project::with_graph();
    temp.config(
        "[lint]\nprogram = \"graphlint-no-such-engine\"\nconfiguration-files = [\"a.yml\"]\n",
    );
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .stderr(predicates::str::contains(
            "unrecognized field `lint.configuration-files`",
        ));
}

#[test]
fn empty_graph_file_is_config_error() {
    let temp = Project::with_graph();
    temp.config("[graph]\nfile = \"\"\n");
    graphlint_cmd()
        .arg("lint")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("graph.file must not be empty"));
}
