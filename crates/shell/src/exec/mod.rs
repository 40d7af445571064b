// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution of parsed command trees.
//!
//! The executor owns the two long-lived collaborators — the built-in table
//! and an environment snapshot — and threads an initially empty [`Hooks`]
//! bundle through each run.

mod builtins;
mod environment;
mod error;
mod expand;
mod expand_glob;
mod hooks;
mod path;
mod redirect;
mod run;

pub use builtins::{BuiltinFn, Builtins};
pub use environment::Environment;
pub use error::ExecError;
pub use hooks::Hooks;

use crate::ast::Node;

/// Executes command trees against a built-in table and an environment
/// snapshot.
#[derive(Debug)]
pub struct Executor {
    builtins: Builtins,
    env: Environment,
}

impl Executor {
    /// Executor over the process environment with the default built-ins.
    pub fn new() -> Self {
        Self::with_parts(Builtins::default(), Environment::from_process())
    }

    pub fn with_parts(builtins: Builtins, env: Environment) -> Self {
        Self { builtins, env }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Execute a command tree.
    ///
    /// The root is always waited on, error or not, so any child forked
    /// before a failure is still reaped.
    pub fn run(&self, root: &mut Node) -> Result<(), ExecError> {
        let hooks = Hooks::new();
        let result = root.execute(&self.builtins, &self.env, &hooks);
        root.wait();
        result
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
