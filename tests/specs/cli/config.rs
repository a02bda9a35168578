// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn add_instance_strips_a_trailing_slash_when_saving() {
    let temp = init_temp();

    notelink()
        .args(["config", "add-instance", "https://dev.azure.com/org/"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = read_config(&temp);
    assert!(config.contains("url = \"https://dev.azure.com/org\""));
}

#[test]
fn add_instance_with_title_and_default_persists_both() {
    let temp = init_temp();

    notelink()
        .args([
            "config",
            "add-instance",
            "https://dev.azure.com/org",
            "--title",
            "Main",
            "--default",
        ])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added instance Main"));

    let config = read_config(&temp);
    assert!(config.contains("title = \"Main\""));
    assert!(config.contains("default = true"));
}

#[test]
fn a_second_default_instance_clears_the_first() {
    let temp = init_temp();

    notelink()
        .args(["config", "add-instance", "https://one", "--title", "A", "--default"])
        .current_dir(temp.path())
        .assert()
        .success();
    notelink()
        .args(["config", "add-instance", "https://two", "--title", "B", "--default"])
        .current_dir(temp.path())
        .assert()
        .success();

    let shown = notelink()
        .args(["config", "show", "--output", "json"])
        .current_dir(temp.path())
        .assert()
        .success();
    let settings: serde_json::Value =
        serde_json::from_slice(&shown.get_output().stdout).unwrap();

    let defaults: Vec<bool> = settings["instances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|instance| instance["default"].as_bool().unwrap())
        .collect();
    assert_eq!(defaults, vec![false, true]);
}

#[test]
fn remove_instance_is_addressed_by_title() {
    let temp = init_temp();

    notelink()
        .args(["config", "add-instance", "https://one", "--title", "A"])
        .current_dir(temp.path())
        .assert()
        .success();
    notelink()
        .args(["config", "remove-instance", "A"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed instance A"));

    let config = read_config(&temp);
    assert!(!config.contains("https://one"));
}

#[test]
fn remove_unknown_instance_fails() {
    let temp = init_temp();

    notelink()
        .args(["config", "remove-instance", "nope"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("instance not found"));
}

#[test]
fn default_instance_switches_the_marker() {
    let temp = init_temp();

    notelink()
        .args(["config", "add-instance", "https://one", "--title", "A", "--default"])
        .current_dir(temp.path())
        .assert()
        .success();
    notelink()
        .args(["config", "add-instance", "https://two", "--title", "B"])
        .current_dir(temp.path())
        .assert()
        .success();
    notelink()
        .args(["config", "default-instance", "B"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("B is now the default instance"));

    let shown = notelink()
        .args(["config", "show", "--output", "json"])
        .current_dir(temp.path())
        .assert()
        .success();
    let settings: serde_json::Value =
        serde_json::from_slice(&shown.get_output().stdout).unwrap();
    assert_eq!(settings["instances"][0]["default"], false);
    assert_eq!(settings["instances"][1]["default"], true);
}

#[test]
fn add_and_remove_project() {
    let temp = init_temp();

    notelink()
        .args(["config", "add-project", "azure", "Azure DevOps"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added project Azure DevOps (azure)"));

    assert!(read_config(&temp).contains("abbreviation = \"azure\""));

    notelink()
        .args(["config", "remove-project", "AZURE"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(!read_config(&temp).contains("abbreviation"));
}

#[test]
fn local_reference_settings_are_persisted() {
    let temp = init_temp();

    notelink()
        .args(["config", "issue-path", "Work/Issues"])
        .current_dir(temp.path())
        .assert()
        .success();
    notelink()
        .args(["config", "info-file", "Readme"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = read_config(&temp);
    assert!(config.contains("issue_path = \"Work/Issues\""));
    assert!(config.contains("info_file = \"Readme\""));
}

#[test]
fn input_toggles_are_persisted() {
    let temp = init_temp();

    notelink()
        .args(["config", "newline", "false"])
        .current_dir(temp.path())
        .assert()
        .success();
    notelink()
        .args(["config", "auto-project", "true"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = read_config(&temp);
    assert!(config.contains("insert_newline_on_enter = false"));
    assert!(config.contains("use_first_project_as_default = true"));
}

#[test]
fn show_lists_the_configuration_as_text() {
    let temp = configured_temp();

    notelink()
        .args(["config", "show"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A: https://dev.azure.com/org"))
        .stdout(predicate::str::contains("azure: Azure DevOps"))
        .stdout(predicate::str::contains("info file: _Info"));
}

#[test]
fn show_from_a_nested_directory_finds_the_root_config() {
    let temp = configured_temp();
    let nested = temp.path().join("area/topic");
    std::fs::create_dir_all(&nested).unwrap();

    notelink()
        .args(["config", "show"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("azure: Azure DevOps"));
}
