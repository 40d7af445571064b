// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use std::io;

use nix::errno::Errno;
use thiserror::Error;

/// Errors raised while executing a command line.
///
/// Display strings are the diagnostic bodies the shell prints after its
/// `dwsh: ` prefix.
#[derive(Debug, Error)]
pub enum ExecError {
    /// `argv[0]` resolved neither on `PATH` nor as an existing file.
    #[error("command not found: {command}")]
    CommandNotFound { command: String },

    #[error("no such file or directory: {path}")]
    NoSuchFile { path: String },

    #[error("is a directory: {path}")]
    IsADirectory { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    /// Expansion referenced a variable with no value.
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// A `${` with no matching `}`.
    #[error("missing closing brace in '{word}'")]
    UnclosedBrace { word: String },

    /// A built-in rejected its arguments.
    #[error("{message}")]
    Builtin { message: String },

    /// An argument word cannot be passed to exec.
    #[error("argument contains a NUL byte")]
    NulByte,

    /// An I/O failure outside the classified categories above.
    #[error("{context}: {source}")]
    Io { context: String, source: io::Error },

    /// A raw syscall failure (dup, pipe, fork, ...).
    #[error("{call}: {source}")]
    Sys { call: &'static str, source: Errno },
}

/// Map an I/O error on `path` onto the shell's diagnostic categories.
pub(crate) fn classify_path_error(path: &str, err: io::Error) -> ExecError {
    match err.kind() {
        io::ErrorKind::NotFound => ExecError::NoSuchFile { path: path.to_string() },
        io::ErrorKind::PermissionDenied => ExecError::PermissionDenied { path: path.to_string() },
        io::ErrorKind::IsADirectory => ExecError::IsADirectory { path: path.to_string() },
        _ => ExecError::Io { context: path.to_string(), source: err },
    }
}
