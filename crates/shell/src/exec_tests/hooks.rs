// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hooks bundle tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::exec::Hooks;

#[test]
fn empty_bundle_runs_nothing() {
    let hooks = Hooks::new();
    hooks.run_execute("cmd", &["cmd".into()]);
    hooks.run_fork();
}

#[test]
fn execute_hooks_see_command_and_argv() {
    let seen: Rc<RefCell<Vec<(String, usize)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let hooks = Hooks::new().with_execute(move |command, argv| {
        sink.borrow_mut().push((command.to_string(), argv.len()));
    });

    hooks.run_execute("echo", &["echo".into(), "hi".into()]);
    assert_eq!(seen.borrow().as_slice(), &[("echo".to_string(), 2)]);
}

#[test]
fn fork_hooks_run_in_registration_order() {
    let order: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);
    let hooks = Hooks::new()
        .with_fork(move || first.borrow_mut().push(1))
        .with_fork(move || second.borrow_mut().push(2));

    hooks.run_fork();
    assert_eq!(order.borrow().as_slice(), &[1, 2]);
}

#[test]
fn extension_leaves_the_base_untouched() {
    let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let base = Hooks::new().with_fork(move || *sink.borrow_mut() += 1);
    let extended = {
        let sink = Rc::clone(&count);
        base.with_fork(move || *sink.borrow_mut() += 10)
    };

    base.run_fork();
    assert_eq!(*count.borrow(), 1);

    extended.run_fork();
    assert_eq!(*count.borrow(), 12);
}

#[test]
fn clone_shares_the_same_callbacks() {
    let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let hooks = Hooks::new().with_execute(move |_, _| *sink.borrow_mut() += 1);

    let copy = hooks.clone();
    hooks.run_execute("a", &[]);
    copy.run_execute("b", &[]);
    assert_eq!(*count.borrow(), 2);
}
