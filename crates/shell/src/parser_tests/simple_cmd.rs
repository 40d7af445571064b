// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{assert_args, get_command, parse_none, parse_some};
use crate::parser::Parser;

#[test]
fn single_word_command() {
    let node = parse_some("echo");
    assert_args(get_command(&node), &["echo"]);
}

#[test]
fn command_with_args() {
    let node = parse_some("ls -la /tmp");
    assert_args(get_command(&node), &["ls", "-la", "/tmp"]);
}

#[test]
fn quoted_argument_is_one_word() {
    let node = parse_some("echo \"hello world\"");
    assert_args(get_command(&node), &["echo", "hello world"]);
}

#[test]
fn adjacent_quoted_regions_stay_separate_words() {
    let node = parse_some("echo \"a\"b");
    assert_args(get_command(&node), &["echo", "a", "b"]);
}

#[test]
fn every_command_has_at_least_one_word() {
    for input in ["echo", "echo a", "a b c d e"] {
        let node = parse_some(input);
        assert!(!get_command(&node).args.is_empty(), "input: {input:?}");
    }
}

#[test]
fn blank_inputs_produce_nothing() {
    parse_none("");
    parse_none("   ");
    parse_none("\t");
}

#[test]
fn parse_is_pure() {
    let first = Parser::parse("echo hi").expect("parse failed");
    let second = Parser::parse("echo hi").expect("parse failed");
    assert_eq!(first, second);
}
