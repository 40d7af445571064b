// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end executor tests: real fork/exec against standard utilities,
//! observed through redirected files.
//!
//! Serialized: redirections swap the shell's own fd 1 around each fork,
//! and the test process is the shell here.

use std::fs;

use serial_test::serial;

use super::{executor, executor_with_env, parse};
use crate::exec::{Builtins, Environment, ExecError, Executor};

fn read_file(path: &std::path::Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {path:?}: {e}"))
}

#[test]
#[serial]
fn external_command_with_output_redirection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root = parse(&format!("echo hello > {}", out.display()));
    executor().run(&mut root).expect("run failed");

    assert_eq!(read_file(&out), "hello\n");
}

#[test]
#[serial]
fn append_chain_accumulates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("log.txt");
    let shell = executor();

    let mut first = parse(&format!("echo one > {}", out.display()));
    shell.run(&mut first).expect("run failed");
    let mut rest = parse(&format!("echo a >> {0} ; echo b >> {0}", out.display()));
    shell.run(&mut rest).expect("run failed");

    assert_eq!(read_file(&out), "one\na\nb\n");
}

#[test]
#[serial]
fn input_redirection_feeds_the_child() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let out = dir.path().join("out.txt");
    fs::write(&input, "copy me\n").expect("seed file");

    let mut root = parse(&format!("cat < {} > {}", input.display(), out.display()));
    executor().run(&mut root).expect("run failed");

    assert_eq!(read_file(&out), "copy me\n");
}

#[test]
#[serial]
fn pipeline_connects_stdout_to_stdin() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root = parse(&format!("echo hi | tr h H > {}", out.display()));
    executor().run(&mut root).expect("run failed");

    assert_eq!(read_file(&out), "Hi\n");
}

#[test]
#[serial]
fn three_stage_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root = parse(&format!("echo abc | tr a x | tr b y > {}", out.display()));
    executor().run(&mut root).expect("run failed");

    assert_eq!(read_file(&out), "xyc\n");
}

#[test]
#[serial]
fn builtin_output_flows_into_a_pipe() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root = parse(&format!("pwd | tr / _ > {}", out.display()));
    executor().run(&mut root).expect("run failed");

    let cwd = std::env::current_dir().expect("current dir").display().to_string();
    let expected = format!("{}\n", cwd.replace('/', "_"));
    let written = read_file(&out);
    assert!(written.contains(&expected), "expected {expected:?} within {written:?}");
}

#[test]
#[serial]
fn sequential_halves_run_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root =
        parse(&format!("echo first > {0} ; echo second >> {0}", out.display()));
    executor().run(&mut root).expect("run failed");

    assert_eq!(read_file(&out), "first\nsecond\n");
}

#[test]
#[serial]
fn failed_left_half_does_not_stop_the_right_half() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root = parse(&format!(
        "definitely-not-a-command-dwsh ; echo ok > {}",
        out.display()
    ));
    let err = executor().run(&mut root).expect_err("left half must fail");
    assert!(matches!(err, ExecError::CommandNotFound { .. }));

    assert_eq!(read_file(&out), "ok\n");
}

#[test]
#[serial]
fn failed_pipe_left_skips_the_right_half() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");

    let mut root = parse(&format!(
        "definitely-not-a-command-dwsh | tr a b > {}",
        out.display()
    ));
    let err = executor().run(&mut root).expect_err("pipe must fail");
    assert!(matches!(err, ExecError::CommandNotFound { .. }));
    assert!(!out.exists(), "the right half must never have started");
}

#[test]
fn command_not_found_names_the_program() {
    let mut root = parse("definitely-not-a-command-dwsh");
    match executor().run(&mut root) {
        Err(ExecError::CommandNotFound { command }) => {
            assert_eq!(command, "definitely-not-a-command-dwsh");
        }
        other => panic!("expected CommandNotFound, got {other:?}"),
    }
}

#[test]
fn undefined_variable_aborts_before_any_fork() {
    let mut root = parse("echo $DWSH_SURELY_UNSET_VARIABLE_XYZ");
    match executor().run(&mut root) {
        Err(ExecError::UndefinedVariable { name }) => {
            assert_eq!(name, "DWSH_SURELY_UNSET_VARIABLE_XYZ");
        }
        other => panic!("expected UndefinedVariable, got {other:?}"),
    }
}

#[test]
#[serial]
fn glob_expansion_reaches_the_child_argv() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("b.txt"), b"").expect("seed");
    fs::write(dir.path().join("a.txt"), b"").expect("seed");
    let out = dir.path().join("out.log");

    let mut root = parse(&format!("echo {0}/*.txt > {1}", dir.path().display(), out.display()));
    executor().run(&mut root).expect("run failed");

    let expected = format!(
        "{0}/a.txt {0}/b.txt\n",
        dir.path().display()
    );
    assert_eq!(read_file(&out), expected);
}

#[test]
fn fully_globbed_away_command_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut root = parse(&format!("{}/*.absent", dir.path().display()));
    executor().run(&mut root).expect("an empty expansion is not an error");
}

#[test]
fn missing_path_means_command_not_found() {
    let shell = executor_with_env(Environment::new());
    let mut root = parse("echo hi");
    assert!(matches!(
        shell.run(&mut root),
        Err(ExecError::CommandNotFound { .. })
    ));
}

#[test]
fn wait_is_idempotent_and_safe_after_failure() {
    let shell = Executor::with_parts(Builtins::default(), Environment::new());
    let mut root = parse("no-such-program-here");
    let _ = shell.run(&mut root);
    // run() already waited; waiting again must be a no-op
    root.wait();
    root.wait();
}
