// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard expansion tests.
//!
//! Patterns are absolute (inside a tempdir) so the tests are independent
//! of the process working directory.

use std::fs;
use std::path::Path;

use crate::exec::expand_glob::expand_glob;

fn touch(dir: &Path, name: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, b"").expect("create file");
}

#[test]
fn word_without_star_passes_through() {
    for word in ["plain", "file.txt", "a?b", "[abc]", ""] {
        assert_eq!(expand_glob(word), vec![word.to_string()], "word: {word:?}");
    }
}

#[test]
fn star_matches_files_sorted() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "b.txt");
    touch(dir.path(), "a.txt");
    touch(dir.path(), "c.log");

    let pattern = format!("{}/*.txt", dir.path().display());
    let matches = expand_glob(&pattern);
    assert_eq!(
        matches,
        vec![
            dir.path().join("a.txt").display().to_string(),
            dir.path().join("b.txt").display().to_string(),
        ]
    );
}

#[test]
fn no_match_expands_to_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pattern = format!("{}/*.doesnotexist", dir.path().display());
    assert_eq!(expand_glob(&pattern), Vec::<String>::new());
}

#[test]
fn double_star_crosses_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "top.c");
    touch(dir.path(), "sub/inner.c");
    touch(dir.path(), "sub/deep/deepest.c");

    let pattern = format!("{}/**/*.c", dir.path().display());
    let matches = expand_glob(&pattern);
    assert_eq!(matches.len(), 3, "matches: {matches:?}");
    assert!(matches.iter().any(|m| m.ends_with("deepest.c")));
}

#[test]
fn hidden_files_need_an_explicit_dot() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), ".hidden");
    touch(dir.path(), "visible");

    let all = expand_glob(&format!("{}/*", dir.path().display()));
    assert_eq!(all, vec![dir.path().join("visible").display().to_string()]);

    let dotted = expand_glob(&format!("{}/.*", dir.path().display()));
    assert!(dotted.iter().any(|m| m.ends_with(".hidden")), "matches: {dotted:?}");
}

#[test]
fn question_mark_is_literal() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "ab");
    touch(dir.path(), "a?x");

    // `?` must only match itself, so `a?*` cannot match `ab`
    let matches = expand_glob(&format!("{}/a?*", dir.path().display()));
    assert_eq!(matches, vec![dir.path().join("a?x").display().to_string()]);
}

#[test]
fn brackets_are_literal() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "a");
    touch(dir.path(), "[ab]x");

    let matches = expand_glob(&format!("{}/[ab]*", dir.path().display()));
    assert_eq!(matches, vec![dir.path().join("[ab]x").display().to_string()]);
}

#[test]
fn unmatchable_pattern_expands_to_nothing() {
    // `**` glued to a name is not a valid recursive component
    let matches = expand_glob("/nonexistent-root-dwsh/a**b");
    assert_eq!(matches, Vec::<String>::new());
}
