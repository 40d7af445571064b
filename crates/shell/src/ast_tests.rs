// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ast::{CommandNode, MultiNode, Node, OpenMode, PipeNode, RedirectSpec};

fn command(name: &str) -> CommandNode {
    CommandNode::new(vec![name.to_string()])
}

#[test]
fn command_node_starts_without_a_pid() {
    let node = command("ls");
    assert_eq!(node.pid, None);
    assert_eq!(node.args, vec!["ls".to_string()]);
}

#[test]
fn redirect_spec_picks_the_conventional_fd() {
    assert_eq!(RedirectSpec::new(OpenMode::Read, "in".into()).fd, 0);
    assert_eq!(RedirectSpec::new(OpenMode::Truncate, "out".into()).fd, 1);
    assert_eq!(RedirectSpec::new(OpenMode::Append, "out".into()).fd, 1);
}

#[test]
fn nodes_compare_structurally() {
    let a = Node::Pipe(PipeNode::new(Node::Command(command("a")), Node::Command(command("b"))));
    let b = Node::Pipe(PipeNode::new(Node::Command(command("a")), Node::Command(command("b"))));
    assert_eq!(a, b);

    let c = Node::Multi(MultiNode::new(Node::Command(command("a")), Node::Command(command("b"))));
    assert_ne!(a, c);
}

#[test]
fn clone_is_deep() {
    let original = Node::Command(command("ls"));
    let copy = original.clone();
    assert_eq!(original, copy);
}
