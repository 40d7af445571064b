// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the shell executor.

use super::{Builtins, Environment, Executor};
use crate::ast::Node;
use crate::parser::Parser;

mod basic;
mod builtins;
mod expansion;
mod glob;
mod hooks;
mod path;
mod redirections;

/// Parse a line that must produce a node.
pub(crate) fn parse(input: &str) -> Node {
    Parser::parse(input)
        .unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
        .unwrap_or_else(|| panic!("expected a node for {input:?}"))
}

/// Executor over the real process environment with the default built-ins.
pub(crate) fn executor() -> Executor {
    Executor::new()
}

/// Executor with a controlled environment.
pub(crate) fn executor_with_env(env: Environment) -> Executor {
    Executor::with_parts(Builtins::default(), env)
}

/// Environment containing only the given variables.
pub(crate) fn env_of(vars: &[(&str, &str)]) -> Environment {
    let mut env = Environment::new();
    for (name, value) in vars {
        env.set(*name, *value);
    }
    env
}
