// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Core tree-walking execution: expansion, dispatch, fork/exec, pipes,
//! and child reaping.

use std::ffi::{CStr, CString};
use std::io::{self, Write};
use std::os::fd::IntoRawFd;
use std::os::unix::ffi::OsStrExt;
use std::process;

use nix::errno::Errno;
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::sys::wait::waitpid;
use nix::unistd::{self, ForkResult};

use crate::ast::{CommandNode, MultiNode, Node, PipeNode, RedirectionsNode};

use super::builtins::Builtins;
use super::environment::Environment;
use super::error::ExecError;
use super::hooks::Hooks;
use super::redirect::{Redirection, RedirectionStack};
use super::{expand, expand_glob, path};

impl Node {
    /// Execute this node.
    ///
    /// Pair with [`Node::wait`], which must run even if execution failed
    /// partway — a child forked before the failure still needs reaping.
    pub fn execute(
        &mut self,
        builtins: &Builtins,
        env: &Environment,
        hooks: &Hooks,
    ) -> Result<(), ExecError> {
        match self {
            Node::Command(command) => execute_command(command, builtins, env, hooks),
            Node::Redirections(node) => execute_redirections(node, builtins, env, hooks),
            Node::Pipe(node) => execute_pipe(node, builtins, env, hooks),
            Node::Multi(node) => execute_multi(node, builtins, env, hooks),
        }
    }

    /// Collect any children this node forked.
    ///
    /// Idempotent; a node whose execution failed before forking waits on
    /// nothing.
    pub fn wait(&mut self) {
        match self {
            Node::Command(command) => {
                if let Some(pid) = command.pid.take() {
                    match waitpid(pid, None) {
                        Ok(status) => tracing::debug!(%pid, ?status, "reaped child"),
                        Err(errno) => tracing::debug!(%pid, %errno, "waitpid failed"),
                    }
                }
            }
            Node::Redirections(node) => node.base.wait(),
            Node::Pipe(node) => {
                node.left.wait();
                node.right.wait();
            }
            Node::Multi(node) => {
                node.left.wait();
                node.right.wait();
            }
        }
    }
}

/// Expand, then dispatch to a built-in or fork an external program.
fn execute_command(
    command: &mut CommandNode,
    builtins: &Builtins,
    env: &Environment,
    hooks: &Hooks,
) -> Result<(), ExecError> {
    // Variable expansion feeds wildcard expansion; a word may grow into
    // several arguments or vanish entirely.
    let mut argv: Vec<String> = Vec::with_capacity(command.args.len());
    for word in &command.args {
        let expanded = expand::expand_vars(word, env)?;
        argv.extend(expand_glob::expand_glob(&expanded));
    }
    let Some(name) = argv.first().cloned() else {
        // every word globbed away
        return Ok(());
    };

    let cmd_span = tracing::debug_span!("shell.cmd", cmd = %name);
    let _guard = cmd_span.enter();

    if let Some(builtin) = builtins.get(&name) {
        hooks.run_execute(&name, &argv);
        return builtin(&argv);
    }

    let program = path::lookup(&name, env)?;
    let program = CString::new(program.as_os_str().as_bytes().to_vec())
        .map_err(|_| ExecError::NulByte)?;
    let c_argv = argv
        .iter()
        .map(|arg| CString::new(arg.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ExecError::NulByte)?;

    // Flush buffered output so the child does not inherit and replay it.
    let _ = io::stdout().flush();

    // The shell is single-threaded; the child does nothing but run its
    // hooks and exec.
    match unsafe { unistd::fork() }.map_err(|errno| ExecError::Sys { call: "fork", source: errno })?
    {
        ForkResult::Child => {
            hooks.run_execute(&name, &argv);
            hooks.run_fork();
            exec_image(&program, &c_argv)
        }
        ForkResult::Parent { child } => {
            tracing::debug!(pid = %child, cmd = %name, "forked");
            command.pid = Some(child);
            Ok(())
        }
    }
}

/// Replace the child's process image; never returns.
///
/// On exec failure the child reports its own diagnostic and exits without
/// unwinding the parent's stack frames.
fn exec_image(program: &CStr, argv: &[CString]) -> ! {
    let errno = match unistd::execv(program, argv) {
        Ok(never) => match never {},
        Err(errno) => errno,
    };
    let detail = match errno {
        Errno::ENOENT => "no such file or directory",
        Errno::EACCES => "permission denied",
        Errno::EISDIR => "is a directory",
        _ => "cannot execute",
    };
    eprintln!("dwsh: {detail}: {}", program.to_string_lossy());
    process::exit(if errno == Errno::ENOENT { 127 } else { 126 });
}

/// Apply the redirections, run the base node, unwind in reverse.
fn execute_redirections(
    node: &mut RedirectionsNode,
    builtins: &Builtins,
    env: &Environment,
    hooks: &Hooks,
) -> Result<(), ExecError> {
    let stack = RedirectionStack::apply(&node.redirections)?;
    let result = node.base.execute(builtins, env, hooks);
    drop(stack);
    result
}

/// `;` — run the halves one after the other, each waited on before the
/// next starts. A failed left half still lets the right half run; the
/// first error is the one reported.
fn execute_multi(
    node: &mut MultiNode,
    builtins: &Builtins,
    env: &Environment,
    hooks: &Hooks,
) -> Result<(), ExecError> {
    let left = node.left.execute(builtins, env, hooks);
    node.left.wait();
    let right = node.right.execute(builtins, env, hooks);
    node.right.wait();
    left.and(right)
}

/// `|` — connect left stdout to right stdin and run both concurrently.
///
/// After left is dispatched only the left child may hold the write end,
/// and while right runs only the right child may hold the read end; any
/// extra holder keeps the other side from ever seeing EOF.
fn execute_pipe(
    node: &mut PipeNode,
    builtins: &Builtins,
    env: &Environment,
    hooks: &Hooks,
) -> Result<(), ExecError> {
    let (read_end, write_end) = match unistd::pipe() {
        Ok((r, w)) => (r.into_raw_fd(), w.into_raw_fd()),
        Err(errno) => return Err(ExecError::Sys { call: "pipe", source: errno }),
    };

    // The left child must drop the read end it inherits, or a left side
    // reading its own pipe would never see EOF.
    let left_hooks = hooks.with_fork(move || {
        let _ = unistd::close(read_end);
    });

    let left_result = (|| {
        let mut stdout_scope = Redirection::to_fd(STDOUT_FILENO, write_end)?;
        stdout_scope.enter()?;
        node.left.execute(builtins, env, &left_hooks)
    })();

    // The parent gives up the write end as soon as left is dispatched;
    // a built-in's output is already written and flushed by now.
    let _ = unistd::close(write_end);

    if left_result.is_err() {
        let _ = unistd::close(read_end);
        return left_result;
    }

    let right_result = (|| {
        let mut stdin_scope = Redirection::to_fd(STDIN_FILENO, read_end)?;
        stdin_scope.enter()?;
        node.right.execute(builtins, env, hooks)
    })();

    let _ = unistd::close(read_end);
    right_result
}
