// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted-word tests.
//!
//! Quotes delimit a word whose content is taken verbatim — no escape
//! processing, no expansion markers. The quotes themselves never appear in
//! the lexeme. A quote only opens a quoted word at token start; inside a
//! word run it is an ordinary character.

use crate::lexer::Lexer;
use crate::token::TokenKind;

lex_tests! {
    single_quoted: "echo 'hello'" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello".into()),
    ],
    double_quoted: "echo \"hello\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello".into()),
    ],
    quoted_spaces_preserved: "echo \"hello world\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello world".into()),
    ],
    empty_single_quotes: "''" => [TokenKind::Word("".into())],
    empty_double_quotes: "\"\"" => [TokenKind::Word("".into())],
    operators_inside_quotes: "echo 'a | b ; c > d'" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("a | b ; c > d".into()),
    ],
    single_inside_double: "\"it's\"" => [TokenKind::Word("it's".into())],
    double_inside_single: "'say \"hi\"'" => [TokenKind::Word("say \"hi\"".into())],
    no_escape_processing: "'a\\nb'" => [TokenKind::Word("a\\nb".into())],
    dollar_kept_verbatim: "'$HOME'" => [TokenKind::Word("$HOME".into())],
    unicode_in_quotes: "'héllo wörld'" => [TokenKind::Word("héllo wörld".into())],
}

//
// Adjacent quoted and unquoted runs are separate WORD tokens; a quoted
// region starting mid-word does not exist (the quote is a word char there).

lex_tests! {
    quoted_then_bare: "\"a\"b" => [
        TokenKind::Word("a".into()),
        TokenKind::Word("b".into()),
    ],
    quoted_then_quoted: "'a''b'" => [
        TokenKind::Word("a".into()),
        TokenKind::Word("b".into()),
    ],
    bare_then_quote_is_one_word: "a\"b\"" => [
        TokenKind::Word("a\"b\"".into()),
    ],
}

span_tests! {
    // spans cover the quotes even though lexemes omit them
    single_quoted_span: "'ab'" => [(0, 4)],
    double_quoted_span: "x \"ab\"" => [(0, 1), (2, 6)],
    empty_quotes_span: "''" => [(0, 2)],
}

#[test]
fn quoted_word_lexeme_excludes_quotes() {
    let tokens = Lexer::tokenize("'hello world'").expect("lexing failed");
    assert_eq!(tokens[0].kind, TokenKind::Word("hello world".into()));
    assert_eq!(tokens[0].span, crate::Span::new(0, 13));
}
