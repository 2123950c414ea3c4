// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the `lvsh` binary, driven against fixture
//! scripts: each `NAME.lvsh` has an expected compiled form (`NAME.sh`)
//! and, where it runs, expected stdout (`NAME.out`).

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn read(name: &str) -> String {
    std::fs::read_to_string(fixture(name))
        .unwrap_or_else(|e| panic!("reading fixture {name}: {e}"))
}

fn lvsh() -> Command {
    Command::cargo_bin("lvsh").expect("lvsh binary builds")
}

/// Compile `NAME.lvsh` with --bash and compare against `NAME.sh`.
fn assert_compiles(name: &str) {
    let output = lvsh().arg("--bash").arg(fixture(&format!("{name}.lvsh"))).output().unwrap();
    assert!(output.status.success(), "compile failed: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), read(&format!("{name}.sh")), "compiled form of {name}");
}

/// Run `NAME.lvsh` with `args` and compare stdout against `NAME.out`.
fn assert_runs(name: &str, args: &[&str]) {
    let output =
        lvsh().arg(fixture(&format!("{name}.lvsh"))).args(args).output().unwrap();
    assert!(output.status.success(), "run failed: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), read(&format!("{name}.out")), "stdout of {name}");
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Compilation and execution per fixture
// ---------------------------------------------------------------------------

#[test]
fn plain_bash_scripts_pass_through() {
    assert_compiles("bash");
    assert_runs("bash", &[]);
}

#[test]
fn simple_one_level_script() {
    assert_compiles("simple");
    assert_runs("simple", &[]);
}

#[test]
fn multi_leveled_script() {
    assert_compiles("levels");
    assert_runs("levels", &[]);
}

#[test]
fn arguments_transport_to_upper_levels() {
    assert_runs("arguments", &["Obi-Wan", "Anakin"]);
}

// ---------------------------------------------------------------------------
// Failure and flags
// ---------------------------------------------------------------------------

#[test]
fn indentation_jump_aborts_before_running() {
    let output = lvsh().arg(fixture("jump.lvsh")).output().unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty(), "no script output may be produced");
    assert!(stderr_of(&output).contains("indentation jumped"));
}

#[test]
fn quiet_suppresses_relayed_output() {
    let output = lvsh().arg("--quiet").arg(fixture("simple.lvsh")).output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn child_exit_status_becomes_the_cli_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("fail.lvsh");
    std::fs::write(&script, "echo before\nexit 7\necho after\n").unwrap();

    let output = lvsh().arg(&script).output().unwrap();
    assert_eq!(output.status.code(), Some(7));
    assert_eq!(stdout_of(&output), "before\n");
}

#[test]
fn missing_script_file_is_reported() {
    let output = lvsh().arg("no-such-file.lvsh").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("no-such-file.lvsh"));
}
