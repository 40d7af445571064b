// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection parsing tests.

use super::helpers::{assert_args, get_command, get_redirections, parse_some};
use crate::ast::OpenMode;
use crate::parser::Parser;

#[test]
fn output_redirection() {
    let node = parse_some("echo hi > out.txt");
    let redirections = get_redirections(&node);
    assert_args(get_command(&redirections.base), &["echo", "hi"]);
    assert_eq!(redirections.redirections.len(), 1);

    let spec = &redirections.redirections[0];
    assert_eq!(spec.fd, 1);
    assert_eq!(spec.mode, OpenMode::Truncate);
    assert_eq!(spec.path, "out.txt");
}

#[test]
fn append_redirection() {
    let node = parse_some("echo hi >> out.txt");
    let spec = &get_redirections(&node).redirections[0];
    assert_eq!(spec.fd, 1);
    assert_eq!(spec.mode, OpenMode::Append);
}

#[test]
fn input_redirection() {
    let node = parse_some("wc < in.txt");
    let spec = &get_redirections(&node).redirections[0];
    assert_eq!(spec.fd, 0);
    assert_eq!(spec.mode, OpenMode::Read);
    assert_eq!(spec.path, "in.txt");
}

#[test]
fn multiple_redirections_keep_source_order() {
    let node = parse_some("cmd < in > out >> log");
    let specs = &get_redirections(&node).redirections;
    let modes: Vec<_> = specs.iter().map(|s| s.mode).collect();
    assert_eq!(modes, vec![OpenMode::Read, OpenMode::Truncate, OpenMode::Append]);
    let paths: Vec<_> = specs.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, vec!["in", "out", "log"]);
}

#[test]
fn no_whitespace_around_operator() {
    let node = parse_some("cmd>file");
    let redirections = get_redirections(&node);
    assert_args(get_command(&redirections.base), &["cmd"]);
    assert_eq!(redirections.redirections[0].path, "file");
}

#[test]
fn quoted_redirection_target() {
    let node = parse_some("echo hi > 'a file'");
    assert_eq!(get_redirections(&node).redirections[0].path, "a file");
}

#[test]
fn missing_target_is_an_error() {
    assert!(Parser::parse("echo hi >").is_err());
    assert!(Parser::parse("echo hi >>").is_err());
    assert!(Parser::parse("wc <").is_err());
    assert!(Parser::parse("echo > | tr a b").is_err());
}

#[test]
fn redirection_without_command_is_an_error() {
    // the grammar attaches redirections to a command, so `>foo` has
    // nothing to hang on to
    assert!(Parser::parse(">foo").is_err());
}
