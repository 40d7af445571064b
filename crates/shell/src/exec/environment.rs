// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable environment used for expansion and `PATH` lookup.

use std::collections::HashMap;

/// A snapshot of the shell's variable environment.
///
/// Read-only during execution; children inherit the real process
/// environment directly through exec, so this map only feeds expansion
/// and program lookup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// An empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the parent process environment.
    pub fn from_process() -> Self {
        Self { vars: std::env::vars().collect() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Colon-separated entries of `PATH`, in search order.
    ///
    /// An unset `PATH` yields no entries at all; an empty entry means the
    /// working directory, as usual.
    pub fn path_entries(&self) -> impl Iterator<Item = &str> {
        self.get("PATH").into_iter().flat_map(|path| path.split(':'))
    }
}
