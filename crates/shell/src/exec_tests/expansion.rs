// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable expansion tests.

use super::super::expand::expand_vars;
use super::super::ExecError;
use super::env_of;
use crate::exec::Environment;

fn expand(word: &str, vars: &[(&str, &str)]) -> Result<String, ExecError> {
    expand_vars(word, &env_of(vars))
}

#[test]
fn no_dollar_is_identity() {
    for word in ["", "plain", "with spaces", "a{b}c", "100%"] {
        assert_eq!(expand(word, &[]).expect("expansion failed"), word);
    }
}

#[yare::parameterized(
    bare = { "$HOME", "/home/u" },
    braced = { "${HOME}", "/home/u" },
    prefix = { "x$HOME", "x/home/u" },
    braced_with_suffix = { "${HOME}stead", "/home/ustead" },
    twice = { "$HOME:$HOME", "/home/u:/home/u" },
)]
fn expands_known_variable(word: &str, expected: &str) {
    let result = expand(word, &[("HOME", "/home/u")]).expect("expansion failed");
    assert_eq!(result, expected);
}

#[test]
fn bare_name_stops_at_non_name_characters() {
    let result = expand("$AB1", &[("AB", "v")]).expect("expansion failed");
    assert_eq!(result, "v1");
}

#[test]
fn underscores_are_name_characters() {
    let result = expand("$MY_VAR", &[("MY_VAR", "yes")]).expect("expansion failed");
    assert_eq!(result, "yes");
}

#[yare::parameterized(
    digit = { "$1", "$1" },
    double_dollar = { "$$", "$$" },
    trailing_dollar = { "cost$", "cost$" },
    dollar_space = { "$ x", "$ x" },
)]
fn dollar_without_a_name_stays_literal(word: &str, expected: &str) {
    let result = expand(word, &[]).expect("expansion failed");
    assert_eq!(result, expected);
}

#[test]
fn braced_name_may_contain_anything_but_the_brace() {
    let result = expand("${odd name!}", &[("odd name!", "v")]).expect("expansion failed");
    assert_eq!(result, "v");
}

#[test]
fn undefined_variable_is_a_hard_error() {
    match expand("$MISSING", &[]) {
        Err(ExecError::UndefinedVariable { name }) => assert_eq!(name, "MISSING"),
        other => panic!("expected UndefinedVariable, got {other:?}"),
    }
}

#[test]
fn empty_braces_are_an_undefined_variable() {
    match expand("${}", &[]) {
        Err(ExecError::UndefinedVariable { name }) => assert_eq!(name, ""),
        other => panic!("expected UndefinedVariable, got {other:?}"),
    }
}

#[test]
fn unclosed_brace_is_a_hard_error() {
    match expand("${HOME", &[("HOME", "/home/u")]) {
        Err(ExecError::UnclosedBrace { word }) => assert_eq!(word, "${HOME"),
        other => panic!("expected UnclosedBrace, got {other:?}"),
    }
}

#[test]
fn no_word_splitting_on_the_result() {
    let result = expand("$V", &[("V", "a b  c")]).expect("expansion failed");
    assert_eq!(result, "a b  c");
}

#[test]
fn empty_value_expands_to_empty() {
    let result = expand("x${E}y", &[("E", "")]).expect("expansion failed");
    assert_eq!(result, "xy");
}

#[test]
fn process_environment_snapshot_is_visible() {
    // PATH is always present in a test environment
    let env = Environment::from_process();
    assert!(env.get("PATH").is_some());
}
