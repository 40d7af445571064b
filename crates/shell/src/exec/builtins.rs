// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that run inside the shell process.

use std::collections::HashMap;
use std::io::{self, Write};
use std::process;

use super::error::{classify_path_error, ExecError};

/// A built-in command. Receives the full argv (program name included) and
/// runs with the shell's own descriptors, redirections already applied.
pub type BuiltinFn = fn(&[String]) -> Result<(), ExecError>;

/// Name → implementation table for built-in commands.
#[derive(Debug)]
pub struct Builtins {
    table: HashMap<&'static str, BuiltinFn>,
}

impl Default for Builtins {
    /// The standard set: `exit`, `pwd`, `cd`.
    fn default() -> Self {
        let mut builtins = Self::empty();
        builtins.register("exit", builtin_exit);
        builtins.register("pwd", builtin_pwd);
        builtins.register("cd", builtin_cd);
        builtins
    }
}

impl Builtins {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Add or replace a built-in.
    pub fn register(&mut self, name: &'static str, builtin: BuiltinFn) {
        self.table.insert(name, builtin);
    }

    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.table.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}

/// `exit [n]` — terminate the shell with status `n` (default 0).
fn builtin_exit(argv: &[String]) -> Result<(), ExecError> {
    let status = match argv.get(1) {
        Some(arg) => arg.parse().map_err(|_| ExecError::Builtin {
            message: format!("exit: invalid status '{arg}'"),
        })?,
        None => 0,
    };
    process::exit(status)
}

/// `pwd` — print the working directory to fd 1.
fn builtin_pwd(_argv: &[String]) -> Result<(), ExecError> {
    let cwd = std::env::current_dir()
        .map_err(|err| ExecError::Io { context: "pwd".to_string(), source: err })?;
    let mut stdout = io::stdout();
    // flush before the redirection scope unwinds fd 1
    writeln!(stdout, "{}", cwd.display())
        .and_then(|()| stdout.flush())
        .map_err(|err| ExecError::Io { context: "pwd".to_string(), source: err })
}

/// `cd DIR` — change the shell's working directory.
fn builtin_cd(argv: &[String]) -> Result<(), ExecError> {
    let dir = argv
        .get(1)
        .ok_or_else(|| ExecError::Builtin { message: "cd: missing operand".to_string() })?;
    std::env::set_current_dir(dir).map_err(|err| classify_path_error(dir, err))
}
