// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline specs.

use crate::prelude::*;

#[test]
fn pipe_feeds_left_stdout_to_right_stdin() {
    dwsh().write_stdin("echo hi | tr h H\n").assert().success().stdout("Hi\n");
}

#[test]
fn three_stage_pipeline() {
    dwsh()
        .write_stdin("echo abc | tr a x | tr b y\n")
        .assert()
        .success()
        .stdout("xyc\n");
}

#[test]
fn both_halves_finish_before_the_next_line_runs() {
    dwsh()
        .write_stdin("echo one | tr o O\necho two\n")
        .assert()
        .success()
        .stdout("One\ntwo\n");
}

#[test]
fn builtin_output_can_be_piped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().canonicalize().expect("canonicalize");
    let expected = format!("{}\n", target.display().to_string().replace('/', "_"));

    dwsh()
        .current_dir(&target)
        .write_stdin("pwd | tr / _\n")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn pipe_reader_sees_eof_when_the_writer_exits() {
    // `wc -c` only terminates once every write end is closed; a leaked
    // write end in the shell would hang this forever
    dwsh().write_stdin("echo abc | wc -c\n").assert().success().stdout("4\n");
}

#[test]
fn failed_left_half_reports_and_continues() {
    let output = run_script("definitely-not-a-command-dwsh | tr a b\necho ok\n");
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("command not found"));
    assert_eq!(stdout_of(&output), "ok\n");
}
