// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection specs.

use std::fs;

use crate::prelude::*;

#[test]
fn output_redirection_writes_the_file_not_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.out");

    let output = run_script(&format!("echo one > {}\n", file.display()));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
    assert_eq!(fs::read_to_string(&file).expect("read back"), "one\n");
}

#[test]
fn stdout_is_restored_after_a_redirection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.out");

    let output = run_script(&format!("echo one > {}\necho two\n", file.display()));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "two\n");
    assert_eq!(fs::read_to_string(&file).expect("read back"), "one\n");
}

#[test]
fn append_accumulates_across_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.out");

    let script = format!(
        "echo one > {0}\necho a >> {0} ; echo b >> {0}\n",
        file.display()
    );
    assert!(run_script(&script).status.success());
    assert_eq!(fs::read_to_string(&file).expect("read back"), "one\na\nb\n");
}

#[test]
fn input_redirection_feeds_the_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.in");
    fs::write(&file, "hello\n").expect("seed file");

    dwsh()
        .write_stdin(format!("cat < {}\n", file.display()))
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn redirection_without_whitespace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.out");

    assert!(run_script(&format!("echo hi>{}\n", file.display())).status.success());
    assert_eq!(fs::read_to_string(&file).expect("read back"), "hi\n");
}

#[test]
fn redirection_applies_to_one_pipeline_stage_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.out");

    let output = run_script(&format!("echo hi | tr h H > {}\n", file.display()));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
    assert_eq!(fs::read_to_string(&file).expect("read back"), "Hi\n");
}

#[test]
fn missing_input_file_is_reported() {
    let output = run_script("cat < /definitely/not/here.txt\necho ok\n");
    assert!(output.status.success());
    assert!(
        stderr_of(&output)
            .contains("dwsh: no such file or directory: /definitely/not/here.txt"),
        "stderr was: {}",
        stderr_of(&output)
    );
    assert_eq!(stdout_of(&output), "ok\n");
}

#[test]
fn created_files_get_conventional_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("t.out");

    assert!(run_script(&format!("echo x > {}\n", file.display())).status.success());
    let mode = fs::metadata(&file).expect("metadata").permissions().mode() & 0o777;
    // 0o644 filtered through the process umask
    assert_eq!(mode & !0o022, mode, "unexpected write bits: {mode:o}");
    assert!(mode <= 0o644, "mode too permissive: {mode:o}");
}
