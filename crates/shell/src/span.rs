// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset positions within a single command line.
//!
//! The shell works one line at a time, so there is no file, no line
//! number, and no multi-line bookkeeping here: a [`Span`] is just the
//! byte range a token occupied in the line the user typed, and the
//! rendering helpers point a caret back into that line.

use serde::{Deserialize, Serialize};

/// Half-open byte range locating a token in its command line.
///
/// `start` is the token's position as reported in diagnostics
/// ("at position N"). Offsets are bytes, so spans slice UTF-8 input
/// directly; caret rendering converts to character widths itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// First byte of the token (inclusive).
    pub start: usize,
    /// One past the last byte of the token (exclusive).
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Zero-width span, used for `Eof` at the end of the line.
    #[inline]
    pub fn empty(position: usize) -> Self {
        Self { start: position, end: position }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` when the span falls outside the line or
    /// off a character boundary.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }
}

/// Width of the caret run for a span, in characters.
///
/// Zero-width spans (such as `Eof`) still get one caret so there is
/// always something to see.
fn caret_width(line: &str, start: usize, end: usize) -> usize {
    line.get(start..end).map(|text| text.chars().count()).unwrap_or(0).max(1)
}

/// Render the offending part of a command line with a caret underneath.
///
/// Long lines are clipped to `window` bytes on either side of the span,
/// with `...` marking whatever was cut:
///
/// ```text
/// ...ho one two | ;
///               ^
/// ```
pub fn caret_snippet(line: &str, span: Span, window: usize) -> String {
    let anchor = span.start.min(line.len());

    let mut from = anchor.saturating_sub(window);
    while from > 0 && !line.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = anchor.saturating_add(window).min(line.len());
    while to < line.len() && !line.is_char_boundary(to) {
        to += 1;
    }

    let opening = if from > 0 { "..." } else { "" };
    let closing = if to < line.len() { "..." } else { "" };
    let visible = line.get(from..to).unwrap_or("");

    let lead = opening.len() + visible.get(..anchor - from).map(|s| s.chars().count()).unwrap_or(0);
    let carets = caret_width(line, anchor, span.end.clamp(anchor, to));

    format!("{opening}{visible}{closing}\n{}{}", " ".repeat(lead), "^".repeat(carets))
}

/// Full diagnostic for one command line: the message, the position, and
/// the line itself with the span marked.
///
/// ```text
/// error: expected a word, found '|'
///   --> position 7
///    |
///    | echo > |
///    |        ^
/// ```
pub fn diagnostic_message(line: &str, span: Span, message: &str) -> String {
    let anchor = span.start.min(line.len());
    let lead = line.get(..anchor).map(|s| s.chars().count()).unwrap_or(0);
    let carets = caret_width(line, anchor, span.end.max(anchor));

    format!(
        "error: {message}\n  --> position {}\n   |\n   | {line}\n   | {}{}",
        span.start,
        " ".repeat(lead),
        "^".repeat(carets)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
