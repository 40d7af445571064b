// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in command specs.

use crate::prelude::*;

#[test]
fn pwd_prints_the_working_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let expected = format!("{}\n", dir.path().canonicalize().expect("canonicalize").display());

    dwsh()
        .current_dir(dir.path().canonicalize().expect("canonicalize"))
        .write_stdin("pwd\n")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn cd_persists_across_the_rest_of_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().canonicalize().expect("canonicalize");
    let expected = format!("{}\n", target.display());

    dwsh()
        .write_stdin(format!("cd {} ; pwd\n", target.display()))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn cd_on_one_line_affects_the_next() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().canonicalize().expect("canonicalize");
    let expected = format!("{}\n", target.display());

    dwsh()
        .write_stdin(format!("cd {}\npwd\n", target.display()))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn cd_without_operand_is_reported_and_survivable() {
    let output = run_script("cd\necho still here\n");
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("dwsh: cd: missing operand"));
    assert_eq!(stdout_of(&output), "still here\n");
}

#[test]
fn cd_to_a_missing_directory_is_classified() {
    let output = run_script("cd /definitely/not/here\n");
    assert!(output.status.success());
    assert!(
        stderr_of(&output).contains("dwsh: no such file or directory: /definitely/not/here"),
        "stderr was: {}",
        stderr_of(&output)
    );
}

#[test]
fn exit_sets_the_status() {
    dwsh().write_stdin("exit 3\n").assert().code(3);
}

#[test]
fn exit_default_status_is_zero() {
    dwsh().write_stdin("exit\n").assert().success();
}

#[test]
fn exit_stops_the_session_immediately() {
    let output = run_script("exit 7\necho never\n");
    assert_eq!(output.status.code(), Some(7));
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn exit_with_garbage_is_reported_and_survivable() {
    let output = run_script("exit abc\necho alive\n");
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("invalid status"));
    assert_eq!(stdout_of(&output), "alive\n");
}
