// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection scope tests.
//!
//! Most tests aim the guard at a scratch descriptor instead of the
//! process's fd 1, so they cannot race with the test harness's own output.
//! The mechanism under test (backup, dup2, LIFO restore) is identical for
//! any target fd. Tests that do rewire fd 0 are serialized.

use std::fs;
use std::io::{self, Read};
use std::os::fd::{BorrowedFd, IntoRawFd, RawFd};
use std::path::{Path, PathBuf};

use serial_test::serial;

use crate::ast::{OpenMode, RedirectSpec};
use crate::exec::redirect::{Redirection, RedirectionStack};
use crate::exec::ExecError;

/// A scratch descriptor backed by its own file, used as a redirection
/// target in place of fd 1.
fn scratch_target(dir: &Path, name: &str) -> (RawFd, PathBuf) {
    let path = dir.join(name);
    let fd = fs::File::create(&path).expect("create scratch file").into_raw_fd();
    (fd, path)
}

fn spec_for(fd: RawFd, mode: OpenMode, path: &Path) -> RedirectSpec {
    RedirectSpec { fd, mode, path: path.display().to_string() }
}

fn write_fd(fd: RawFd, data: &[u8]) {
    let borrowed = unsafe { BorrowedFd::borrow_raw(fd) };
    nix::unistd::write(borrowed, data).expect("write through fd");
}

fn close_fd(fd: RawFd) {
    nix::unistd::close(fd).expect("close fd");
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {path:?}: {e}"))
}

#[test]
fn redirection_captures_and_restores_the_target() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, original) = scratch_target(dir.path(), "original.txt");
    let redirected = dir.path().join("redirected.txt");

    let stack = RedirectionStack::apply(&[spec_for(target, OpenMode::Truncate, &redirected)])
        .expect("apply failed");
    write_fd(target, b"inside\n");
    drop(stack);
    write_fd(target, b"outside\n");
    close_fd(target);

    assert_eq!(read_file(&redirected), "inside\n");
    assert_eq!(read_file(&original), "outside\n");
}

#[test]
fn append_mode_appends() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, _original) = scratch_target(dir.path(), "original.txt");
    let log = dir.path().join("log.txt");
    fs::write(&log, "first\n").expect("seed file");

    let stack = RedirectionStack::apply(&[spec_for(target, OpenMode::Append, &log)])
        .expect("apply failed");
    write_fd(target, b"second\n");
    drop(stack);
    close_fd(target);

    assert_eq!(read_file(&log), "first\nsecond\n");
}

#[test]
fn truncate_mode_truncates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, _original) = scratch_target(dir.path(), "original.txt");
    let out = dir.path().join("out.txt");
    fs::write(&out, "old contents that are longer\n").expect("seed file");

    let stack = RedirectionStack::apply(&[spec_for(target, OpenMode::Truncate, &out)])
        .expect("apply failed");
    write_fd(target, b"new\n");
    drop(stack);
    close_fd(target);

    assert_eq!(read_file(&out), "new\n");
}

#[test]
fn stacked_redirections_unwind_lifo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, original) = scratch_target(dir.path(), "original.txt");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    // both target the same fd; the later one wins while the scope is open
    let stack = RedirectionStack::apply(&[
        spec_for(target, OpenMode::Truncate, &first),
        spec_for(target, OpenMode::Truncate, &second),
    ])
    .expect("apply failed");
    write_fd(target, b"payload\n");
    drop(stack);
    write_fd(target, b"after\n");
    close_fd(target);

    assert_eq!(read_file(&first), "");
    assert_eq!(read_file(&second), "payload\n");
    assert_eq!(read_file(&original), "after\n");
}

#[test]
fn failed_apply_unwinds_the_earlier_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, original) = scratch_target(dir.path(), "original.txt");
    let good = dir.path().join("good.txt");

    let specs = [
        spec_for(target, OpenMode::Truncate, &good),
        spec_for(target, OpenMode::Read, Path::new("/definitely/not/here.txt")),
    ];
    assert!(RedirectionStack::apply(&specs).is_err());

    // the first entry was already active; the error path must restore it
    write_fd(target, b"back to normal\n");
    close_fd(target);
    assert_eq!(read_file(&good), "");
    assert_eq!(read_file(&original), "back to normal\n");
}

#[test]
fn missing_input_file_is_classified() {
    let spec = RedirectSpec::new(OpenMode::Read, "/definitely/not/here.txt".into());
    match RedirectionStack::apply(&[spec]) {
        Err(ExecError::NoSuchFile { path }) => assert_eq!(path, "/definitely/not/here.txt"),
        other => panic!("expected NoSuchFile, got {other:?}"),
    }
}

#[test]
fn writing_to_a_directory_is_classified() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, _original) = scratch_target(dir.path(), "original.txt");
    let spec = spec_for(target, OpenMode::Truncate, dir.path());
    let result = RedirectionStack::apply(&[spec]);
    close_fd(target);
    assert!(matches!(result, Err(ExecError::IsADirectory { .. })));
}

#[test]
fn raw_fd_source_is_not_closed_by_the_guard() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (target, original) = scratch_target(dir.path(), "original.txt");
    let raw_path = dir.path().join("raw.txt");
    let raw = fs::File::create(&raw_path).expect("create").into_raw_fd();

    let mut guard = Redirection::to_fd(target, raw).expect("backup failed");
    guard.enter().expect("enter failed");
    write_fd(target, b"via raw fd\n");
    drop(guard);
    write_fd(target, b"restored\n");

    // the caller still owns the source fd and can keep using it
    write_fd(raw, b"still open\n");
    close_fd(raw);
    close_fd(target);

    assert_eq!(read_file(&raw_path), "via raw fd\nstill open\n");
    assert_eq!(read_file(&original), "restored\n");
}

#[test]
#[serial]
fn input_redirection_feeds_fd_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("in.txt");
    fs::write(&file, "from the file\n").expect("seed file");

    let spec = RedirectSpec::new(OpenMode::Read, file.display().to_string());
    let stack = RedirectionStack::apply(&[spec]).expect("apply failed");
    let mut content = String::new();
    io::stdin().read_to_string(&mut content).expect("read fd 0");
    drop(stack);

    assert_eq!(content, "from the file\n");
}

#[test]
#[serial]
fn repeated_scopes_do_not_leak_descriptors() {
    let Ok(entries) = fs::read_dir("/proc/self/fd") else {
        return; // not observable on this platform
    };
    let before = entries.count();

    let dir = tempfile::tempdir().expect("tempdir");
    let (target, _original) = scratch_target(dir.path(), "original.txt");
    let out = dir.path().join("out.txt");
    for _ in 0..500 {
        let stack = RedirectionStack::apply(&[spec_for(target, OpenMode::Truncate, &out)])
            .expect("apply failed");
        write_fd(target, b"x");
        drop(stack);
    }
    close_fd(target);

    let after = fs::read_dir("/proc/self/fd").map(|entries| entries.count()).unwrap_or(0);
    // a leak of the backup or file fd would add ~1000 entries; allow
    // jitter from concurrently running tests
    assert!(
        after < before + 20,
        "fd table grew from {before} to {after} across 500 scopes"
    );
}
