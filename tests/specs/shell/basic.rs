// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain command execution specs.

use crate::prelude::*;

#[test]
fn echo_writes_its_arguments() {
    dwsh().write_stdin("echo hello\n").assert().success().stdout("hello\n");
}

#[test]
fn quoted_argument_keeps_its_spaces() {
    dwsh()
        .write_stdin("echo \"hello world\"\n")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn lines_run_in_order() {
    dwsh().write_stdin("echo a\necho b\n").assert().success().stdout("a\nb\n");
}

#[test]
fn semicolon_sequences_on_one_line() {
    dwsh().write_stdin("echo a ; echo b\n").assert().success().stdout("a\nb\n");
}

#[test]
fn blank_lines_are_skipped() {
    dwsh().write_stdin("\n\necho ok\n\n").assert().success().stdout("ok\n");
}

#[test]
fn eof_exits_zero_with_no_prompt_noise() {
    dwsh().write_stdin("").assert().success().stdout("");
}

#[test]
fn variable_expansion_reads_the_environment() {
    dwsh()
        .env("DWSH_SPEC_HOME", "/home/u")
        .write_stdin("echo $DWSH_SPEC_HOME\n")
        .assert()
        .success()
        .stdout("/home/u\n");
}

#[test]
fn braced_variable_expansion() {
    dwsh()
        .env("DWSH_SPEC_VAR", "value")
        .write_stdin("echo ${DWSH_SPEC_VAR}!\n")
        .assert()
        .success()
        .stdout("value!\n");
}

#[test]
fn script_file_argument_is_executed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = dir.path().join("script.dwsh");
    std::fs::write(&script, "echo from a file\n").expect("write script");

    dwsh().arg(&script).assert().success().stdout("from a file\n");
}

#[test]
fn missing_script_file_fails_up_front() {
    dwsh().arg("/definitely/not/here.dwsh").assert().failure();
}

#[test]
fn version_flag_prints_a_version() {
    let output = dwsh().arg("--version").output().expect("dwsh runs");
    assert!(stdout_of(&output).contains("0.1"));
}
