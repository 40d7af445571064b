// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::span::{caret_snippet, diagnostic_message, Span};

#[test]
fn new_and_len() {
    let span = Span::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
}

#[test]
fn empty_span_is_zero_width() {
    let span = Span::empty(7);
    assert_eq!(span.start, 7);
    assert_eq!(span.end, 7);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

#[test]
fn slice_extracts_the_token_text() {
    assert_eq!(Span::new(5, 10).slice("echo hello"), "hello");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(5, 50).slice("abc"), "");
}

#[test]
fn slice_off_a_char_boundary_is_empty() {
    // 你 is three bytes; offset 1 is inside it
    assert_eq!(Span::new(1, 3).slice("你好"), "");
}

#[test]
fn caret_sits_under_the_span() {
    let line = "echo | | bad";
    let snippet = caret_snippet(line, Span::new(7, 8), 30);
    let lines: Vec<_> = snippet.lines().collect();
    assert_eq!(lines, vec!["echo | | bad", "       ^"]);
}

#[test]
fn caret_run_covers_the_whole_span() {
    let snippet = caret_snippet("abcdef", Span::new(2, 5), 30);
    assert!(snippet.ends_with("  ^^^"), "snippet was:\n{snippet}");
}

#[test]
fn zero_width_span_still_gets_one_caret() {
    // Eof at the end of the line
    let snippet = caret_snippet("echo hi", Span::empty(7), 30);
    assert_eq!(snippet, "echo hi\n       ^");
}

#[test]
fn long_lines_are_clipped_with_ellipses() {
    let line = "echo aaaaaaaaaaaaaaaaaaaa | bbbbbbbbbbbbbbbbbbbb";
    let pipe = line.find('|').expect("pipe is present");
    let snippet = caret_snippet(line, Span::new(pipe, pipe + 1), 5);
    let lines: Vec<_> = snippet.lines().collect();
    assert!(lines[0].starts_with("..."), "snippet was:\n{snippet}");
    assert!(lines[0].ends_with("..."), "snippet was:\n{snippet}");
    // the caret stays under the pipe inside the window
    let caret_at = lines[1].find('^').expect("caret is present");
    let pipe_at = lines[0].find('|').expect("pipe survives clipping");
    assert_eq!(caret_at, pipe_at);
}

#[test]
fn short_lines_are_not_clipped() {
    let snippet = caret_snippet("echo hi", Span::new(0, 4), 30);
    assert!(!snippet.contains("..."));
}

#[test]
fn caret_column_counts_chars_not_bytes() {
    // two 3-byte chars before the span
    let snippet = caret_snippet("你好x", Span::new(6, 7), 30);
    assert_eq!(snippet, "你好x\n  ^");
}

#[test]
fn caret_width_counts_chars_not_bytes() {
    // the span covers two chars but six bytes
    let snippet = caret_snippet("x 你好", Span::new(2, 8), 30);
    assert_eq!(snippet, "x 你好\n  ^^");
}

#[test]
fn diagnostic_carries_message_position_and_line() {
    let rendered = diagnostic_message("echo > |", Span::new(7, 8), "expected a word");
    assert!(rendered.contains("error: expected a word"));
    assert!(rendered.contains("--> position 7"));
    assert!(rendered.contains("| echo > |"));
    assert!(rendered.lines().last().expect("caret line").ends_with("       ^"));
}

#[test]
fn diagnostic_for_a_span_past_the_end() {
    // Eof spans sit one past the last byte
    let rendered = diagnostic_message("echo |", Span::empty(6), "expected a command");
    assert!(rendered.contains("--> position 6"));
    assert!(rendered.contains('^'));
}
