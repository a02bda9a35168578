// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

const LINK_123: &str = "[AZURE-123](https://dev.azure.com/org/Azure%20DevOps/_workitems/edit/123)";

#[test]
fn resolves_a_reference_argument_exactly() {
    let temp = configured_temp();

    notelink()
        .args(["web", "AZURE-123"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(LINK_123));
}

#[test]
fn resolves_the_piped_selection() {
    let temp = configured_temp();

    notelink()
        .arg("web")
        .write_stdin("AZURE-123\n")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(LINK_123));
}

#[test]
fn abbreviation_matching_is_case_insensitive() {
    let temp = configured_temp();

    notelink()
        .args(["web", "azure-7"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[azure-7](https://dev.azure.com/org/Azure%20DevOps/_workitems/edit/7)",
        ));
}

#[test]
fn ticket_id_keeps_everything_after_the_first_dash() {
    let temp = configured_temp();

    notelink()
        .args(["web", "AZURE-12-3"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[AZURE-12-3](https://dev.azure.com/org/Azure%20DevOps/_workitems/edit/12-3)",
        ));
}

#[test]
fn unknown_abbreviation_needs_a_choice_and_fails_without_a_terminal() {
    let temp = configured_temp();

    notelink()
        .args(["web", "XYZ-5"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn project_override_resumes_the_resolution() {
    let temp = configured_temp();

    notelink()
        .args(["web", "XYZ-5", "--project", "azure"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[XYZ-5](https://dev.azure.com/org/Azure%20DevOps/_workitems/edit/5)",
        ));
}

#[test]
fn unknown_project_override_fails() {
    let temp = configured_temp();

    notelink()
        .args(["web", "XYZ-5", "--project", "nope"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("project not found"));
}

#[test]
fn dashless_reference_cannot_become_a_web_link() {
    let temp = configured_temp();

    notelink()
        .args(["web", "12345", "--project", "azure"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no '-' separator"));
}

#[test]
fn auto_project_policy_covers_unknown_abbreviations() {
    let temp = configured_temp();

    notelink()
        .args(["config", "auto-project", "true"])
        .current_dir(temp.path())
        .assert()
        .success();

    notelink()
        .args(["web", "XYZ-5"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[XYZ-5](https://dev.azure.com/org/Azure%20DevOps/_workitems/edit/5)",
        ));
}

#[test]
fn no_instances_is_a_missing_configuration_error() {
    let temp = init_temp();

    notelink()
        .args(["web", "AZURE-123"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tracker instances configured"));
}

#[test]
fn default_mode_without_marked_instance_warns_and_uses_the_first() {
    let temp = configured_temp();
    notelink()
        .args([
            "config",
            "add-instance",
            "https://dev.azure.com/other",
            "--title",
            "B",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    notelink()
        .args(["web", "--default", "AZURE-123"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(LINK_123))
        .stderr(predicate::str::contains(
            "no default instance configured, using the first instance available: A",
        ));
}

#[test]
fn default_mode_with_marked_instance_is_silent() {
    let temp = configured_temp();
    notelink()
        .args([
            "config",
            "add-instance",
            "https://dev.azure.com/other",
            "--title",
            "B",
            "--default",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    notelink()
        .args(["web", "--default", "AZURE-123"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[AZURE-123](https://dev.azure.com/other/Azure%20DevOps/_workitems/edit/123)",
        ))
        .stderr(predicate::str::contains("no default instance").not());
}

#[test]
fn explicit_mode_with_two_instances_fails_without_a_terminal() {
    let temp = configured_temp();
    notelink()
        .args(["config", "add-instance", "https://dev.azure.com/other"])
        .current_dir(temp.path())
        .assert()
        .success();

    notelink()
        .args(["web", "AZURE-123"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--instance"));
}

#[test]
fn instance_override_selects_by_title() {
    let temp = configured_temp();
    notelink()
        .args([
            "config",
            "add-instance",
            "https://dev.azure.com/other",
            "--title",
            "B",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    notelink()
        .args(["web", "--instance", "B", "AZURE-123"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[AZURE-123](https://dev.azure.com/other/Azure%20DevOps/_workitems/edit/123)",
        ));
}

#[test]
fn empty_piped_input_cannot_be_prompted_for() {
    let temp = configured_temp();

    notelink()
        .arg("web")
        .write_stdin("")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no terminal is attached"));
}
