// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::token::{Span, Token, TokenKind};

#[test]
fn token_new_stores_kind_and_span() {
    let token = Token::new(TokenKind::Pipe, Span::new(3, 4));
    assert_eq!(token.kind, TokenKind::Pipe);
    assert_eq!(token.span, Span::new(3, 4));
}

#[yare::parameterized(
    word = { TokenKind::Word("ls".into()), "word 'ls'" },
    redirect_out = { TokenKind::RedirectOut, "'>'" },
    redirect_append = { TokenKind::RedirectAppend, "'>>'" },
    redirect_in = { TokenKind::RedirectIn, "'<'" },
    pipe = { TokenKind::Pipe, "'|'" },
    command_end = { TokenKind::CommandEnd, "';'" },
    eof = { TokenKind::Eof, "end of input" },
)]
fn display(kind: TokenKind, expected: &str) {
    assert_eq!(kind.to_string(), expected);
}

#[test]
fn unknown_display_escapes_control_characters() {
    assert_eq!(TokenKind::Unknown('\u{1}').to_string(), "character '\\u{1}'");
}

#[test]
fn only_words_are_words() {
    assert!(TokenKind::Word(String::new()).is_word());
    assert!(!TokenKind::Pipe.is_word());
    assert!(!TokenKind::Eof.is_word());
}
