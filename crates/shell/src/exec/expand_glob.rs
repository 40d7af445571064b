// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard expansion for argument words.

use glob::MatchOptions;

/// Expand a word containing `*` against the filesystem.
///
/// Only `*` is a metacharacter (`**` matches across directory levels);
/// `?` and `[` are neutralized before matching. Words without `*` pass
/// through untouched as a single-element list. A pattern with no matches
/// expands to nothing at all.
pub(crate) fn expand_glob(word: &str) -> Vec<String> {
    if !word.contains('*') {
        return vec![word.to_string()];
    }

    let options = MatchOptions {
        // `*` must not look into dotfiles unless the pattern says so
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    match glob::glob_with(&neutralize_non_star(word), options) {
        Ok(paths) => paths
            // skip entries that errored (e.g. permission denied), like the
            // readdir-based globs do
            .filter_map(Result::ok)
            .map(|path| path.to_string_lossy().into_owned())
            .collect(),
        Err(err) => {
            tracing::debug!(pattern = %word, error = %err, "unmatchable glob pattern");
            Vec::new()
        }
    }
}

/// Bracket-escape `?` and `[` so only `*` acts as a wildcard.
fn neutralize_non_star(word: &str) -> String {
    let mut pattern = String::with_capacity(word.len());
    for ch in word.chars() {
        match ch {
            '?' => pattern.push_str("[?]"),
            '[' => pattern.push_str("[[]"),
            _ => pattern.push(ch),
        }
    }
    pattern
}
