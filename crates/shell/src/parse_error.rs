// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::LexerError;
use crate::token::{caret_snippet, diagnostic_message, Span, TokenKind};
use thiserror::Error;

/// Parser errors for shell command syntax.
///
/// Use [`ParseError::context`] to generate a human-readable snippet showing
/// where the error occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0}")]
    Lexer(#[from] LexerError),

    #[error("expected {expected}, found {found} at position {}", span.start)]
    UnexpectedToken { found: TokenKind, expected: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexer(e) => e.span(),
            ParseError::UnexpectedToken { span, .. } => *span,
        }
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// Returns a string with the relevant portion of input and a caret
    /// pointing to the error location.
    pub fn context(&self, input: &str, window: usize) -> String {
        caret_snippet(input, self.span(), window)
    }

    /// Generate a rich diagnostic with position info.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_message(input, self.span(), &self.to_string())
    }
}
