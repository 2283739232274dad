//! Integration tests for `multibuild select` / `multibuild deselect`
//!
//! Selection flags persist across invocations and only catalog-known
//! targets can be toggled.

mod common;

use common::TestProject;
use predicates::prelude::*;
use std::process::Command;

fn run_multibuild(project: &TestProject, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multibuild"));
    cmd.current_dir(project.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute multibuild")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_select_persists_across_invocations() {
    let project = TestProject::new();
    project.write_manifest("exit 0", &["Windows64", "Android"]);

    let output = run_multibuild(&project, &["select", "Android"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(predicate::str::contains("1 now selected").eval(&stdout(&output)));

    let out = stdout(&run_multibuild(&project, &["targets"]));
    assert!(predicate::str::contains("1 selected").eval(&out));
}

#[test]
fn test_select_multiple_targets_at_once() {
    let project = TestProject::new();
    project.write_manifest("exit 0", &["Windows64", "Linux64", "Android"]);

    let output = run_multibuild(&project, &["select", "Windows64", "Linux64", "Android"]);
    assert!(output.status.success());
    assert!(predicate::str::contains("3 now selected").eval(&stdout(&output)));
}

#[test]
fn test_deselect_undoes_select() {
    let project = TestProject::new();
    project.write_manifest("exit 0", &["Windows64", "Android"]);

    run_multibuild(&project, &["select", "Windows64", "Android"]);
    let output = run_multibuild(&project, &["deselect", "Android"]);
    assert!(output.status.success());
    assert!(predicate::str::contains("1 now selected").eval(&stdout(&output)));
}

#[test]
fn test_select_target_outside_catalog_fails() {
    let project = TestProject::new();
    project.write_manifest("exit 0", &["Windows64"]);

    let output = run_multibuild(&project, &["select", "PS5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(predicate::str::contains("'PS5' is not in the current catalog").eval(&stderr(&output)));
}

#[test]
fn test_select_requires_at_least_one_target() {
    let project = TestProject::new();
    project.write_manifest("exit 0", &["Windows64"]);

    let output = run_multibuild(&project, &["select"]);
    assert!(!output.status.success());
}

#[test]
fn test_select_is_idempotent() {
    let project = TestProject::new();
    project.write_manifest("exit 0", &["Windows64", "Android"]);

    run_multibuild(&project, &["select", "Android"]);
    let output = run_multibuild(&project, &["select", "Android"]);
    assert!(output.status.success());
    assert!(predicate::str::contains("1 now selected").eval(&stdout(&output)));
}
