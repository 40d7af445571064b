// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error tests.

use crate::lexer::{Lexer, LexerError};

lex_error_tests! {
    unterminated_single: "'abc" => LexerError::UnterminatedQuote { quote: '\'', .. },
    unterminated_double: "\"abc" => LexerError::UnterminatedQuote { quote: '"', .. },
    bare_single_quote: "'" => LexerError::UnterminatedQuote { quote: '\'', .. },
    bare_double_quote: "\"" => LexerError::UnterminatedQuote { quote: '"', .. },
    mismatched_quotes: "'abc\"" => LexerError::UnterminatedQuote { quote: '\'', .. },
    unterminated_after_words: "echo ok 'oops" => LexerError::UnterminatedQuote { .. },
}

#[test]
fn unterminated_quote_span_starts_at_quote() {
    let err = Lexer::tokenize("echo 'abc").expect_err("expected a lexer error");
    assert_eq!(err.span().start, 5);
}

#[test]
fn error_context_points_at_the_quote() {
    let input = "echo 'abc";
    let err = Lexer::tokenize(input).expect_err("expected a lexer error");
    let context = err.context(input, 20);
    assert!(context.contains('^'), "context must carry a caret:\n{context}");
}
