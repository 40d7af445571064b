// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic format and error recovery specs.

use crate::prelude::*;

#[test]
fn command_not_found_names_the_program() {
    let output = run_script("definitely-not-a-command-dwsh\n");
    assert!(output.status.success(), "the shell itself must not die");
    assert_eq!(stdout_of(&output), "");
    assert_eq!(
        stderr_of(&output),
        "dwsh: command not found: definitely-not-a-command-dwsh\n"
    );
}

#[test]
fn parse_error_prefix_for_a_bare_redirection() {
    let output = run_script(">foo\n");
    assert!(output.status.success());
    assert!(
        stderr_of(&output).starts_with("dwsh: parse error"),
        "stderr was: {}",
        stderr_of(&output)
    );
}

#[test]
fn parse_error_for_a_dangling_pipe() {
    let output = run_script("echo hi |\n");
    assert!(output.status.success());
    assert!(stderr_of(&output).starts_with("dwsh: parse error"));
}

#[test]
fn parse_error_for_an_unterminated_quote() {
    let output = run_script("echo 'oops\n");
    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("dwsh: parse error"));
    assert!(stderr.contains("unterminated quoted word"));
}

#[test]
fn the_session_continues_after_every_kind_of_error() {
    let output = run_script("definitely-not-a-command-dwsh\n>foo\necho $DWSH_UNSET_VAR\necho ok\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "ok\n");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("command not found"));
    assert!(stderr.contains("parse error"));
    assert!(stderr.contains("undefined variable: DWSH_UNSET_VAR"));
}

#[test]
fn undefined_variable_diagnostic() {
    let output = dwsh()
        .env_remove("NO_SUCH_DWSH_VARIABLE")
        .write_stdin("echo $NO_SUCH_DWSH_VARIABLE\n")
        .output()
        .expect("dwsh runs");
    assert!(output.status.success());
    assert_eq!(
        stderr_of(&output),
        "dwsh: undefined variable: NO_SUCH_DWSH_VARIABLE\n"
    );
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn unclosed_brace_diagnostic() {
    let output = run_script("echo ${OOPS\n");
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("missing closing brace"));
}

#[test]
fn exec_failure_is_reported_by_the_child() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plain = dir.path().join("not-executable");
    std::fs::write(&plain, b"just data\n").expect("write file");

    let output = run_script(&format!("{}\n", plain.display()));
    // the shell survives; the child reports permission denied on exec
    assert!(output.status.success());
    assert!(
        stderr_of(&output).contains("permission denied"),
        "stderr was: {}",
        stderr_of(&output)
    );
}
