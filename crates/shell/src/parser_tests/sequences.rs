// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `;` sequencing tests.

use super::helpers::{assert_args, get_command, get_multi, parse_none, parse_some};

#[test]
fn two_commands() {
    let node = parse_some("echo a ; echo b");
    let multi = get_multi(&node);
    assert_args(get_command(&multi.left), &["echo", "a"]);
    assert_args(get_command(&multi.right), &["echo", "b"]);
}

#[test]
fn three_commands_nest_to_the_right() {
    let node = parse_some("a ; b ; c");
    let outer = get_multi(&node);
    assert_args(get_command(&outer.left), &["a"]);
    let inner = get_multi(&outer.right);
    assert_args(get_command(&inner.left), &["b"]);
    assert_args(get_command(&inner.right), &["c"]);
}

#[test]
fn trailing_separator_is_legal_and_invisible() {
    let node = parse_some("echo a ;");
    assert_args(get_command(&node), &["echo", "a"]);
}

#[test]
fn leading_separator_is_legal_and_invisible() {
    let node = parse_some("; echo a");
    assert_args(get_command(&node), &["echo", "a"]);
}

#[test]
fn bare_separators_produce_nothing() {
    parse_none(";");
    parse_none(";;");
    parse_none(" ; ; ");
}

#[test]
fn empty_slots_collapse() {
    // the middle command is all that survives
    let node = parse_some("; echo a ;;");
    assert_args(get_command(&node), &["echo", "a"]);
}
