// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error reporting tests.

use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;

fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Err(e) => e,
        Ok(node) => panic!("expected a parse error for {input:?}, got {node:?}"),
    }
}

#[test]
fn lexer_errors_surface_as_parse_errors() {
    let err = parse_err("echo 'unterminated");
    assert!(matches!(err, ParseError::Lexer(_)));
    assert!(err.to_string().contains("unterminated quoted word"));
}

#[test]
fn leftover_tokens_after_lines_are_an_error() {
    // redirections come after the argument words; a word after them does
    // not restart the command
    let err = parse_err("echo > out stray");
    match err {
        ParseError::UnexpectedToken { found, expected, .. } => {
            assert_eq!(found, TokenKind::Word("stray".into()));
            assert_eq!(expected, "end of input");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn dangling_pipe_names_the_missing_piece() {
    let err = parse_err("a |");
    match err {
        ParseError::UnexpectedToken { found, expected, .. } => {
            assert_eq!(found, TokenKind::Eof);
            assert_eq!(expected, "a command");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn missing_redirect_target_names_the_word() {
    let err = parse_err("echo >");
    match err {
        ParseError::UnexpectedToken { found, expected, .. } => {
            assert_eq!(found, TokenKind::Eof);
            assert_eq!(expected, "a word");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn error_span_points_at_the_offender() {
    let err = parse_err("echo hi | ;");
    assert_eq!(err.span().start, 10);
}

#[test]
fn unknown_token_is_rejected() {
    let err = parse_err("echo \u{1}");
    match err {
        ParseError::UnexpectedToken { found, .. } => {
            assert_eq!(found, TokenKind::Unknown('\u{1}'));
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn diagnostic_renders_with_caret() {
    let input = "echo hi |";
    let err = parse_err(input);
    let rendered = err.diagnostic(input);
    assert!(rendered.contains("error:"), "missing message in:\n{rendered}");
    assert!(rendered.contains('^'), "missing caret in:\n{rendered}");
}
