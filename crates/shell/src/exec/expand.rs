// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable expansion over argument words.

use super::environment::Environment;
use super::error::ExecError;

/// Expand `$NAME` and `${NAME}` references in a word.
///
/// Bare names are a greedy run of ASCII letters and underscores; a `$`
/// followed by anything else (including digits) stays a literal `$`.
/// Braced names take any characters up to the closing `}`; a missing brace
/// is an error. Referencing an unset variable is an error rather than an
/// empty substitution. No word splitting is applied to the result.
pub(crate) fn expand_vars(word: &str, env: &Environment) -> Result<String, ExecError> {
    if !word.contains('$') {
        return Ok(word.to_string());
    }

    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next();
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(c) => name.push(c),
                    None => return Err(ExecError::UnclosedBrace { word: word.to_string() }),
                }
            }
            result.push_str(resolve(&name, env)?);
        } else {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphabetic() || c == '_' {
                    name.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            if name.is_empty() {
                // `$1`, `$$`, or a trailing `$`: no name, keep the dollar
                result.push('$');
            } else {
                result.push_str(resolve(&name, env)?);
            }
        }
    }

    Ok(result)
}

fn resolve<'e>(name: &str, env: &'e Environment) -> Result<&'e str, ExecError> {
    env.get(name).ok_or_else(|| ExecError::UndefinedVariable { name: name.to_string() })
}
