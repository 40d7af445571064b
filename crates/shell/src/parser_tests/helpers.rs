// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for parser tests.

use crate::ast::*;
use crate::parser::Parser;

/// Parse input that must produce a node.
pub fn parse_some(input: &str) -> Node {
    Parser::parse(input)
        .unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
        .unwrap_or_else(|| panic!("expected a node for {input:?}"))
}

/// Parse input that must produce nothing (a legal blank line).
pub fn parse_none(input: &str) {
    let result = Parser::parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"));
    assert!(result.is_none(), "expected no node for {input:?}, got {result:?}");
}

pub fn get_command(node: &Node) -> &CommandNode {
    match node {
        Node::Command(command) => command,
        other => panic!("expected command, got {other:?}"),
    }
}

pub fn get_pipe(node: &Node) -> &PipeNode {
    match node {
        Node::Pipe(pipe) => pipe,
        other => panic!("expected pipe, got {other:?}"),
    }
}

pub fn get_multi(node: &Node) -> &MultiNode {
    match node {
        Node::Multi(multi) => multi,
        other => panic!("expected multi, got {other:?}"),
    }
}

pub fn get_redirections(node: &Node) -> &RedirectionsNode {
    match node {
        Node::Redirections(redirections) => redirections,
        other => panic!("expected redirections, got {other:?}"),
    }
}

/// Assert a command's argument words.
pub fn assert_args(command: &CommandNode, expected: &[&str]) {
    let actual: Vec<_> = command.args.iter().map(String::as_str).collect();
    assert_eq!(actual, expected);
}
