// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `PATH` lookup tests.

use std::fs;
use std::path::PathBuf;

use super::env_of;
use crate::exec::path::lookup;
use crate::exec::ExecError;

fn dir_with(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in names {
        fs::write(dir.path().join(name), b"#!/bin/sh\n").expect("create file");
    }
    dir
}

#[test]
fn finds_command_on_path() {
    let dir = dir_with(&["mytool"]);
    let env = env_of(&[("PATH", &dir.path().display().to_string())]);
    let resolved = lookup("mytool", &env).expect("lookup failed");
    assert_eq!(resolved, dir.path().join("mytool"));
}

#[test]
fn first_path_entry_wins() {
    let first = dir_with(&["tool"]);
    let second = dir_with(&["tool"]);
    let path = format!("{}:{}", first.path().display(), second.path().display());
    let env = env_of(&[("PATH", &path)]);
    let resolved = lookup("tool", &env).expect("lookup failed");
    assert_eq!(resolved, first.path().join("tool"));
}

#[test]
fn later_entries_are_searched() {
    let empty = dir_with(&[]);
    let full = dir_with(&["tool"]);
    let path = format!("{}:{}", empty.path().display(), full.path().display());
    let env = env_of(&[("PATH", &path)]);
    let resolved = lookup("tool", &env).expect("lookup failed");
    assert_eq!(resolved, full.path().join("tool"));
}

#[test]
fn absolute_path_bypasses_path_search() {
    let dir = dir_with(&["tool"]);
    let absolute = dir.path().join("tool").display().to_string();
    // empty PATH: the absolute name must resolve on its own
    let env = env_of(&[("PATH", "")]);
    let resolved = lookup(&absolute, &env).expect("lookup failed");
    assert_eq!(resolved, PathBuf::from(absolute));
}

#[test]
fn missing_command_is_command_not_found() {
    let dir = dir_with(&[]);
    let env = env_of(&[("PATH", &dir.path().display().to_string())]);
    match lookup("nothere", &env) {
        Err(ExecError::CommandNotFound { command }) => assert_eq!(command, "nothere"),
        other => panic!("expected CommandNotFound, got {other:?}"),
    }
}

#[test]
fn unset_path_finds_nothing() {
    let env = env_of(&[]);
    assert!(matches!(lookup("ls", &env), Err(ExecError::CommandNotFound { .. })));
}

#[test]
fn absolute_name_that_does_not_exist_fails() {
    let env = env_of(&[("PATH", "/usr/bin:/bin")]);
    assert!(matches!(
        lookup("/definitely/not/here", &env),
        Err(ExecError::CommandNotFound { .. })
    ));
}

#[test]
fn lookup_is_idempotent() {
    let dir = dir_with(&["tool"]);
    let env = env_of(&[("PATH", &dir.path().display().to_string())]);
    let first = lookup("tool", &env).expect("lookup failed");
    let second = lookup("tool", &env).expect("lookup failed");
    assert_eq!(first, second);
}

#[test]
fn no_executable_bit_check_at_lookup_time() {
    // resolution only tests existence; exec reports permission problems
    let dir = dir_with(&["plain.txt"]);
    let env = env_of(&[("PATH", &dir.path().display().to_string())]);
    assert!(lookup("plain.txt", &env).is_ok());
}
