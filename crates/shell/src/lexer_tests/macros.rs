// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for shell lexer tests.
//!
//! These macros reduce boilerplate in lexer tests by providing
//! declarative test generation. Every success-path test also checks the
//! stream-termination property: the token stream ends with exactly one
//! `Eof`.

/// Generate tokenization success tests.
///
/// # Usage
///
/// ```ignore
/// lex_tests! {
///     name: "input" => [token1, token2, ...],
/// }
/// ```
///
/// The expected list omits the trailing `Eof`; the macro asserts it
/// separately.
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let (eof, rest) = tokens.split_last().expect("token stream is never empty");
                assert_eq!(eof.kind, TokenKind::Eof, "stream must end with Eof: {:?}", $input);
                assert!(
                    rest.iter().all(|t| t.kind != TokenKind::Eof),
                    "only the final token may be Eof: {:?}",
                    $input
                );
                let expected: Vec<TokenKind> = vec![$($token),*];
                let actual: Vec<_> = rest.iter().map(|t| t.kind.clone()).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate tokenization error tests.
///
/// # Usage
///
/// ```ignore
/// lex_error_tests! {
///     name: "input" => ErrorVariant { field: value },
/// }
/// ```
macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Generate span accuracy tests.
///
/// # Usage
///
/// ```ignore
/// span_tests! {
///     name: "input" => [(start, end), ...],
/// }
/// ```
///
/// The expected list omits the trailing `Eof` span.
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let (eof, rest) = tokens.split_last().expect("token stream is never empty");
                assert_eq!(eof.kind, TokenKind::Eof);
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                let actual: Vec<_> = rest.iter().map(|t| (t.span.start, t.span.end)).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
