// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline tests.

use super::helpers::{assert_args, get_command, get_multi, get_pipe, get_redirections, parse_some};
use crate::parser::Parser;

#[test]
fn two_stage_pipe() {
    let node = parse_some("echo hi | tr h H");
    let pipe = get_pipe(&node);
    assert_args(get_command(&pipe.left), &["echo", "hi"]);
    assert_args(get_command(&pipe.right), &["tr", "h", "H"]);
}

#[test]
fn three_stages_nest_to_the_right() {
    let node = parse_some("a | b | c");
    let outer = get_pipe(&node);
    assert_args(get_command(&outer.left), &["a"]);
    let inner = get_pipe(&outer.right);
    assert_args(get_command(&inner.left), &["b"]);
    assert_args(get_command(&inner.right), &["c"]);
}

#[test]
fn pipe_without_spaces() {
    let node = parse_some("a|b");
    let pipe = get_pipe(&node);
    assert_args(get_command(&pipe.left), &["a"]);
    assert_args(get_command(&pipe.right), &["b"]);
}

#[test]
fn redirections_bind_to_their_own_stage() {
    let node = parse_some("a > left.txt | b > right.txt");
    let pipe = get_pipe(&node);
    assert_eq!(get_redirections(&pipe.left).redirections[0].path, "left.txt");
    assert_eq!(get_redirections(&pipe.right).redirections[0].path, "right.txt");
}

#[test]
fn pipe_binds_tighter_than_sequence() {
    let node = parse_some("a | b ; c");
    let multi = get_multi(&node);
    get_pipe(&multi.left);
    assert_args(get_command(&multi.right), &["c"]);
}

#[test]
fn dangling_pipe_is_an_error() {
    assert!(Parser::parse("echo hi |").is_err());
}

#[test]
fn pipe_into_separator_is_an_error() {
    assert!(Parser::parse("a | ; b").is_err());
}

#[test]
fn leading_pipe_is_an_error() {
    assert!(Parser::parse("| a").is_err());
}
