// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: words, operators, whitespace, edge cases.

use crate::lexer::Lexer;
use crate::token::TokenKind;

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
}

lex_tests! {
    single_word: "echo" => [TokenKind::Word("echo".into())],
    simple_words: "echo hello world" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello".into()),
        TokenKind::Word("world".into()),
    ],
    multiple_spaces: "ls   -la" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("-la".into()),
    ],
    tabs_and_spaces: "cmd1\t  cmd2" => [
        TokenKind::Word("cmd1".into()),
        TokenKind::Word("cmd2".into()),
    ],
    command_with_flags: "ls -la --color=auto" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("-la".into()),
        TokenKind::Word("--color=auto".into()),
    ],
    path_word: "ls ./path/to/file.txt" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("./path/to/file.txt".into()),
    ],
}

span_tests! {
    single_word_span: "echo" => [(0, 4)],
    simple_words_span: "echo hello world" => [(0, 4), (5, 10), (11, 16)],
    leading_whitespace_span: "  echo" => [(2, 6)],
}

lex_tests! {
    pipe_operator: "ls | grep foo" => [
        TokenKind::Word("ls".into()),
        TokenKind::Pipe,
        TokenKind::Word("grep".into()),
        TokenKind::Word("foo".into()),
    ],
    semicolon_operator: "cmd1 ; cmd2" => [
        TokenKind::Word("cmd1".into()),
        TokenKind::CommandEnd,
        TokenKind::Word("cmd2".into()),
    ],
    pipe_without_spaces: "ls|grep" => [
        TokenKind::Word("ls".into()),
        TokenKind::Pipe,
        TokenKind::Word("grep".into()),
    ],
    semicolon_without_spaces: "a;b" => [
        TokenKind::Word("a".into()),
        TokenKind::CommandEnd,
        TokenKind::Word("b".into()),
    ],
    only_operators: "|;|" => [
        TokenKind::Pipe,
        TokenKind::CommandEnd,
        TokenKind::Pipe,
    ],
    double_semicolon: ";;" => [
        TokenKind::CommandEnd,
        TokenKind::CommandEnd,
    ],
}

span_tests! {
    pipe_operator_span: "ls | grep" => [(0, 2), (3, 4), (5, 9)],
    semicolon_operator_span: "cmd1 ; cmd2" => [(0, 4), (5, 6), (7, 11)],
}

//
// `$` is not special to the lexer; variable references stay inside words
// and are expanded at execution time.

lex_tests! {
    dollar_in_word: "echo $HOME" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("$HOME".into()),
    ],
    braced_dollar_in_word: "echo ${HOME}x" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("${HOME}x".into()),
    ],
    lone_dollar: "$" => [TokenKind::Word("$".into())],
}

//
// Glob metacharacters are not expanded by the lexer; they are part of
// words and handled at execution time.

lex_tests! {
    glob_star: "ls *.txt" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("*.txt".into()),
    ],
    glob_recursive: "ls **/*.rs" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("**/*.rs".into()),
    ],
}

lex_tests! {
    unicode_in_words: "echo 你好" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("你好".into()),
    ],
    emoji_in_word: "echo 🦦" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("🦦".into()),
    ],
    multibyte_boundary_with_operator: "你好|世界" => [
        TokenKind::Word("你好".into()),
        TokenKind::Pipe,
        TokenKind::Word("世界".into()),
    ],
}

span_tests! {
    emoji_span: "echo 🦦" => [(0, 4), (5, 9)],  // emoji is 4 bytes
    chinese_span: "你好|世界" => [(0, 6), (6, 7), (7, 13)],  // 2 chars * 3 bytes each
}

//
// Control characters are neither whitespace nor word characters; they
// produce Unknown tokens carrying the offending character.

lex_tests! {
    control_char: "a\u{1}b" => [
        TokenKind::Word("a".into()),
        TokenKind::Unknown('\u{1}'),
        TokenKind::Word("b".into()),
    ],
    bare_control_char: "\u{7}" => [TokenKind::Unknown('\u{7}')],
}

#[test]
fn iterator_yields_exactly_one_eof_then_none() {
    let mut lexer = Lexer::new("echo hi");
    let kinds: Vec<_> = (&mut lexer)
        .map(|result| result.map(|t| t.kind))
        .collect::<Result<Vec<_>, _>>()
        .expect("lexing failed");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word("echo".into()),
            TokenKind::Word("hi".into()),
            TokenKind::Eof,
        ]
    );
    assert!(lexer.next().is_none(), "iterator must fuse after Eof");
}

#[test]
fn eof_position_is_input_length() {
    let tokens = Lexer::tokenize("echo hi  ").expect("lexing failed");
    let eof = tokens.last().expect("stream is never empty");
    assert_eq!(eof.span.start, 9);
}

#[test]
fn word_lexeme_preserves_original_bytes() {
    let tokens = Lexer::tokenize("foo").expect("lexing failed");
    match &tokens[0].kind {
        TokenKind::Word(lexeme) => assert_eq!(lexeme, "foo"),
        other => panic!("expected word, got {other:?}"),
    }
    assert_eq!(tokens[0].span.slice("foo"), "foo");
}
