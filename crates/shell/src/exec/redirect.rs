// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped file-descriptor substitution.
//!
//! `dup2`-based redirection of the shell's own descriptors. Every
//! substitution snapshots the target descriptor first and restores it when
//! the scope ends, so the fd table looks the same on every exit path —
//! normal return or error.

use std::fs::OpenOptions;
use std::os::fd::{IntoRawFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;

use nix::unistd;

use crate::ast::{OpenMode, RedirectSpec};

use super::error::{classify_path_error, ExecError};

/// Permission bits for files created by `>` and `>>`.
const CREATE_MODE: u32 = 0o644;

/// One scoped descriptor substitution.
///
/// Construction duplicates the target fd as a backup (failure to do so is
/// an error). [`Redirection::enter`] installs the replacement, opening the
/// file first for file-backed sources. Dropping the guard restores the
/// backup over the target, closes the backup, and closes any fd the guard
/// itself opened. Raw pipe-end sources stay open; their owner closes them.
#[derive(Debug)]
pub(crate) struct Redirection {
    target: RawFd,
    backup: RawFd,
    source: FdSource,
    entered: bool,
}

#[derive(Debug)]
enum FdSource {
    /// A file to open lazily on scope entry.
    File { path: String, mode: OpenMode, opened: Option<RawFd> },
    /// An already-open descriptor owned by the caller (a pipe end).
    Raw(RawFd),
}

impl Redirection {
    /// Guard for a parsed file redirection.
    pub(crate) fn from_spec(spec: &RedirectSpec) -> Result<Self, ExecError> {
        Ok(Self {
            target: spec.fd,
            backup: dup_backup(spec.fd)?,
            source: FdSource::File { path: spec.path.clone(), mode: spec.mode, opened: None },
            entered: false,
        })
    }

    /// Guard that points `target` at an already-open descriptor.
    pub(crate) fn to_fd(target: RawFd, source: RawFd) -> Result<Self, ExecError> {
        Ok(Self { target, backup: dup_backup(target)?, source: FdSource::Raw(source), entered: false })
    }

    /// Install the replacement descriptor over the target.
    pub(crate) fn enter(&mut self) -> Result<(), ExecError> {
        let replacement = match &mut self.source {
            FdSource::File { path, mode, opened } => {
                let fd = open_file(path, *mode)?;
                *opened = Some(fd);
                fd
            }
            FdSource::Raw(fd) => *fd,
        };
        unistd::dup2(replacement, self.target)
            .map_err(|errno| ExecError::Sys { call: "dup2", source: errno })?;
        self.entered = true;
        Ok(())
    }
}

impl Drop for Redirection {
    fn drop(&mut self) {
        if self.entered {
            let _ = unistd::dup2(self.backup, self.target);
        }
        let _ = unistd::close(self.backup);
        if let FdSource::File { opened: Some(fd), .. } = &self.source {
            let _ = unistd::close(*fd);
        }
    }
}

/// A stack of redirections applied in list order and undone in reverse.
#[derive(Debug)]
pub(crate) struct RedirectionStack {
    entries: Vec<Redirection>,
}

impl RedirectionStack {
    /// Enter a guard for every spec, in order. If one fails partway, the
    /// guards already entered unwind in reverse before the error returns.
    pub(crate) fn apply(specs: &[RedirectSpec]) -> Result<Self, ExecError> {
        let mut stack = Self { entries: Vec::with_capacity(specs.len()) };
        for spec in specs {
            let mut redirection = Redirection::from_spec(spec)?;
            redirection.enter()?;
            stack.entries.push(redirection);
        }
        Ok(stack)
    }
}

impl Drop for RedirectionStack {
    fn drop(&mut self) {
        // LIFO: later entries restore first
        while self.entries.pop().is_some() {}
    }
}

fn dup_backup(fd: RawFd) -> Result<RawFd, ExecError> {
    unistd::dup(fd).map_err(|errno| ExecError::Sys { call: "dup", source: errno })
}

fn open_file(path: &str, mode: OpenMode) -> Result<RawFd, ExecError> {
    let mut options = OpenOptions::new();
    match mode {
        OpenMode::Read => {
            options.read(true);
        }
        OpenMode::Truncate => {
            options.write(true).create(true).truncate(true);
        }
        OpenMode::Append => {
            options.write(true).create(true).append(true);
        }
    }
    options.mode(CREATE_MODE);
    let file = options.open(path).map_err(|err| classify_path_error(path, err))?;
    Ok(file.into_raw_fd())
}
