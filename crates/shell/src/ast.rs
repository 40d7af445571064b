// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract syntax tree for parsed command lines.
//!
//! A line parses to at most one [`Node`]; a blank line (or one made only of
//! `;` separators) parses to nothing at all, so the empty command is
//! `Option<Node>` rather than a variant of its own.

use std::os::fd::RawFd;

use nix::unistd::Pid;

/// A node in the command tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single command and its arguments.
    Command(CommandNode),
    /// A command wrapped in one or more I/O redirections.
    Redirections(RedirectionsNode),
    /// Two nodes joined by `|`, run concurrently.
    Pipe(PipeNode),
    /// Two nodes run sequentially (`;`), each waited on before the next.
    Multi(MultiNode),
}

/// An ordered list of argument words; the first is the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandNode {
    /// Argument words as written (before expansion). Never empty.
    pub args: Vec<String>,
    /// Child process id, recorded once the command has forked.
    pub(crate) pid: Option<Pid>,
}

impl CommandNode {
    pub fn new(args: Vec<String>) -> Self {
        debug_assert!(!args.is_empty(), "a command always has a program name");
        Self { args, pid: None }
    }
}

/// A node plus the redirections scoped to its execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectionsNode {
    /// Redirections in source order. Never empty.
    pub redirections: Vec<RedirectSpec>,
    /// The node the redirections apply to.
    pub base: Box<Node>,
}

impl RedirectionsNode {
    pub fn new(redirections: Vec<RedirectSpec>, base: Node) -> Self {
        debug_assert!(!redirections.is_empty(), "redirections list is never empty");
        Self { redirections, base: Box::new(base) }
    }
}

/// Left stdout feeds right stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeNode {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl PipeNode {
    pub fn new(left: Node, right: Node) -> Self {
        Self { left: Box::new(left), right: Box::new(right) }
    }
}

/// Sequential composition with a wait between the halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiNode {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl MultiNode {
    pub fn new(left: Node, right: Node) -> Self {
        Self { left: Box::new(left), right: Box::new(right) }
    }
}

/// A parsed redirection: which descriptor to replace and with what file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSpec {
    /// Target file descriptor: 0 for `<`, 1 for `>` and `>>`.
    pub fd: RawFd,
    /// How to open the file.
    pub mode: OpenMode,
    /// The redirection target filename.
    pub path: String,
}

impl RedirectSpec {
    pub fn new(mode: OpenMode, path: String) -> Self {
        let fd = match mode {
            OpenMode::Read => 0,
            OpenMode::Truncate | OpenMode::Append => 1,
        };
        Self { fd, mode, path }
    }
}

/// How a redirection target file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// `<` — read-only.
    Read,
    /// `>` — create, write-only, truncate.
    Truncate,
    /// `>>` — create, write-only, append.
    Append,
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
