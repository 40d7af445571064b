// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Cursor;

use super::Source;

fn lines_source(bytes: &'static [u8]) -> Source {
    Source::Lines(Box::new(Cursor::new(bytes)))
}

#[test]
fn reads_lines_without_the_terminator() {
    let mut source = lines_source(b"echo a\necho b\n");
    assert_eq!(source.read_line().as_deref(), Some("echo a"));
    assert_eq!(source.read_line().as_deref(), Some("echo b"));
    assert_eq!(source.read_line(), None);
}

#[test]
fn strips_crlf() {
    let mut source = lines_source(b"echo a\r\n");
    assert_eq!(source.read_line().as_deref(), Some("echo a"));
}

#[test]
fn final_line_without_newline_is_delivered() {
    let mut source = lines_source(b"echo last");
    assert_eq!(source.read_line().as_deref(), Some("echo last"));
    assert_eq!(source.read_line(), None);
}

#[test]
fn blank_lines_are_delivered_as_empty() {
    // the parser turns them into nothing; the reader stays dumb
    let mut source = lines_source(b"\necho a\n");
    assert_eq!(source.read_line().as_deref(), Some(""));
    assert_eq!(source.read_line().as_deref(), Some("echo a"));
}

#[test]
fn file_source_reads_a_script() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = dir.path().join("script.dwsh");
    std::fs::write(&script, "echo one\necho two\n").expect("write script");

    let mut source = Source::file(&script).expect("open script");
    assert_eq!(source.read_line().as_deref(), Some("echo one"));
    assert_eq!(source.read_line().as_deref(), Some("echo two"));
    assert_eq!(source.read_line(), None);
}

#[test]
fn missing_file_is_an_error() {
    assert!(Source::file(std::path::Path::new("/definitely/not/here.dwsh")).is_err());
}
