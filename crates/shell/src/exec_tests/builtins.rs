// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in command tests.

use std::cell::RefCell;
use std::fs;

use serial_test::serial;

use super::{env_of, parse};
use crate::ast::{OpenMode, RedirectSpec};
use crate::exec::redirect::RedirectionStack;
use crate::exec::{Builtins, Environment, ExecError, Executor, Hooks};

thread_local! {
    static RECORDED: RefCell<Vec<Vec<String>>> = const { RefCell::new(Vec::new()) };
}

fn recording_builtin(argv: &[String]) -> Result<(), ExecError> {
    RECORDED.with(|calls| calls.borrow_mut().push(argv.to_vec()));
    Ok(())
}

fn take_recorded() -> Vec<Vec<String>> {
    RECORDED.with(|calls| calls.borrow_mut().drain(..).collect())
}

#[test]
fn default_table_has_the_standard_three() {
    let builtins = Builtins::default();
    for name in ["exit", "pwd", "cd"] {
        assert!(builtins.contains(name), "missing builtin: {name}");
    }
    assert!(!builtins.contains("echo"));
}

#[test]
fn register_shadows_an_existing_entry() {
    let mut builtins = Builtins::default();
    builtins.register("cd", recording_builtin);
    let builtin = builtins.get("cd").expect("cd is registered");
    builtin(&["cd".into()]).expect("recording builtin never fails");
    assert_eq!(take_recorded(), vec![vec!["cd".to_string()]]);
}

#[test]
fn builtin_dispatch_wins_over_path_lookup() {
    let mut builtins = Builtins::empty();
    builtins.register("echo", recording_builtin);
    // no PATH at all: dispatch must not even try to resolve a program
    let executor = Executor::with_parts(builtins, Environment::new());

    let mut root = parse("echo hello world");
    executor.run(&mut root).expect("builtin run failed");
    assert_eq!(
        take_recorded(),
        vec![vec!["echo".to_string(), "hello".to_string(), "world".to_string()]]
    );
}

#[test]
fn builtin_receives_expanded_argv() {
    let mut builtins = Builtins::empty();
    builtins.register("rec", recording_builtin);
    let executor = Executor::with_parts(builtins, env_of(&[("WHO", "world")]));

    let mut root = parse("rec $WHO");
    executor.run(&mut root).expect("builtin run failed");
    assert_eq!(take_recorded(), vec![vec!["rec".to_string(), "world".to_string()]]);
}

#[test]
fn execute_hooks_fire_before_a_builtin() {
    let mut builtins = Builtins::empty();
    builtins.register("rec", recording_builtin);
    let env = Environment::new();

    let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&seen);
    let hooks = Hooks::new().with_execute(move |command, _| sink.borrow_mut().push(command.to_string()));

    let mut root = parse("rec");
    root.execute(&builtins, &env, &hooks).expect("execute failed");
    root.wait();

    assert_eq!(seen.borrow().as_slice(), &["rec".to_string()]);
    assert_eq!(take_recorded(), vec![vec!["rec".to_string()]]);
}

#[test]
fn exit_rejects_a_non_numeric_status() {
    let builtins = Builtins::default();
    let exit = builtins.get("exit").expect("exit is registered");
    match exit(&["exit".into(), "abc".into()]) {
        Err(ExecError::Builtin { message }) => assert!(message.contains("invalid status")),
        other => panic!("expected Builtin error, got {other:?}"),
    }
}

#[test]
fn cd_requires_an_operand() {
    let builtins = Builtins::default();
    let cd = builtins.get("cd").expect("cd is registered");
    match cd(&["cd".into()]) {
        Err(ExecError::Builtin { message }) => assert_eq!(message, "cd: missing operand"),
        other => panic!("expected Builtin error, got {other:?}"),
    }
}

#[test]
#[serial]
fn cd_changes_the_working_directory() {
    let original = std::env::current_dir().expect("current dir");
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().canonicalize().expect("canonicalize");

    let builtins = Builtins::default();
    let cd = builtins.get("cd").expect("cd is registered");
    cd(&["cd".into(), target.display().to_string()]).expect("cd failed");
    assert_eq!(std::env::current_dir().expect("current dir"), target);

    std::env::set_current_dir(&original).expect("restore cwd");
}

#[test]
#[serial]
fn cd_to_a_missing_directory_is_classified() {
    let builtins = Builtins::default();
    let cd = builtins.get("cd").expect("cd is registered");
    match cd(&["cd".into(), "/definitely/not/here".into()]) {
        Err(ExecError::NoSuchFile { path }) => assert_eq!(path, "/definitely/not/here"),
        other => panic!("expected NoSuchFile, got {other:?}"),
    }
}

#[test]
#[serial]
fn pwd_writes_the_cwd_through_fd_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("pwd.txt");

    let builtins = Builtins::default();
    let pwd = builtins.get("pwd").expect("pwd is registered");

    let spec = RedirectSpec::new(OpenMode::Truncate, out.display().to_string());
    let stack = RedirectionStack::apply(&[spec]).expect("apply failed");
    pwd(&["pwd".into()]).expect("pwd failed");
    drop(stack);

    let expected = format!("{}\n", std::env::current_dir().expect("current dir").display());
    // contains, not equals: the test harness shares fd 1 and may emit
    // progress lines of its own while the scope is open
    let written = fs::read_to_string(&out).expect("read back");
    assert!(written.contains(&expected), "pwd output missing from {written:?}");
}
