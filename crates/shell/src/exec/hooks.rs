// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback bundles invoked at fixed points during execution.

use std::rc::Rc;

type ExecuteHook = dyn Fn(&str, &[String]);
type ForkHook = dyn Fn();

/// An immutable set of callbacks threaded through execution.
///
/// Execute hooks run with `(command, argv)` just before a built-in is
/// invoked or a forked child replaces its image; fork hooks run in the
/// child after fork, before exec. Extending a bundle produces a new value
/// and leaves the original untouched — that is how a pipe hands only its
/// left half the duty of closing the read end.
#[derive(Clone, Default)]
pub struct Hooks {
    execute: Vec<Rc<ExecuteHook>>,
    fork: Vec<Rc<ForkHook>>,
}

impl Hooks {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this bundle with one more execute hook.
    pub fn with_execute(&self, hook: impl Fn(&str, &[String]) + 'static) -> Self {
        let mut extended = self.clone();
        extended.execute.push(Rc::new(hook));
        extended
    }

    /// A copy of this bundle with one more fork hook.
    pub fn with_fork(&self, hook: impl Fn() + 'static) -> Self {
        let mut extended = self.clone();
        extended.fork.push(Rc::new(hook));
        extended
    }

    pub(crate) fn run_execute(&self, command: &str, argv: &[String]) {
        for hook in &self.execute {
            hook(command, argv);
        }
    }

    pub(crate) fn run_fork(&self) {
        for hook in &self.fork {
            hook();
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("execute", &self.execute.len())
            .field("fork", &self.fork.len())
            .finish()
    }
}
