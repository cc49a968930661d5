//! Property-based tests for the scanner, using proptest for arbitrary inputs.

use loxc_lex::{scan, Literal, TokenKind};
use proptest::prelude::*;

/// Source fragments that exercise every lexeme class, including the
/// failing ones.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,6}(\\.[0-9]{1,4})?",
        "\"[^\"]{0,10}\"",
        "//[^\n]{0,10}\n",
        prop::sample::select(vec![
            "(", ")", "{", "}", ",", ".", ";", "+", "-", "*", "/", "!", "!=", "=", "==", "<",
            "<=", ">", ">=", " ", "\t", "\r", "\n", "@", "#", "\"",
        ])
        .prop_map(str::to_string),
    ]
}

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_property_single_trailing_eof(input in source()) {
        let output = scan(&input);
        let eof_positions: Vec<_> = output
            .tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind == TokenKind::Eof)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(eof_positions, vec![output.tokens.len() - 1]);

        let eof = &output.tokens[output.tokens.len() - 1];
        prop_assert_eq!(eof.lexeme.as_str(), "");
        prop_assert!(eof.literal.is_none());
        prop_assert_eq!(eof.span.start, input.len());
    }

    #[test]
    fn test_property_spans_ordered_and_match_lexemes(input in source()) {
        let output = scan(&input);
        for pair in output.tokens.windows(2) {
            prop_assert!(pair[0].span.precedes(pair[1].span));
            prop_assert!(pair[0].line <= pair[1].line);
        }
        for token in &output.tokens {
            prop_assert_eq!(token.span.slice(&input), token.lexeme.as_str());
        }
    }

    #[test]
    fn test_property_scan_is_deterministic(input in source()) {
        prop_assert_eq!(scan(&input), scan(&input));
    }

    #[test]
    fn test_property_arbitrary_text_never_panics(input in "\\PC{0,200}") {
        let output = scan(&input);
        prop_assert!(output.tokens.last().map(|t| t.is_eof()).unwrap_or(false));
    }

    #[test]
    fn test_property_identifiers(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}") {
        let output = scan(&input);
        prop_assert_eq!(output.tokens.len(), 2);
        let expected = loxc_lex::keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(output.tokens[0].kind, expected);
        prop_assert_eq!(output.tokens[0].lexeme.as_str(), input.as_str());
    }

    #[test]
    fn test_property_numbers(int in "[0-9]{1,10}", frac in proptest::option::of("[0-9]{1,6}")) {
        let input = match &frac {
            Some(frac) => format!("{}.{}", int, frac),
            None => int.clone(),
        };
        let output = scan(&input);
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(output.tokens[0].kind, TokenKind::Number);

        let expected: f64 = input.parse().unwrap();
        prop_assert_eq!(output.tokens[0].literal.clone(), Some(Literal::Number(expected)));

        let rendered = output.tokens[0].value().into_owned();
        prop_assert!(rendered.contains('.'));
        prop_assert_eq!(rendered.parse::<f64>().unwrap(), expected);
    }

    #[test]
    fn test_property_string_literals(content in "[^\"]{0,100}") {
        let input = format!("\"{}\"", content);
        let output = scan(&input);
        prop_assert!(output.errors.is_empty());
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(output.tokens[0].literal.clone(), Some(Literal::Str(content.clone())));
        prop_assert_eq!(output.tokens[0].value().into_owned(), content);
    }

    #[test]
    fn test_property_errors_in_source_order(input in source()) {
        let output = scan(&input);
        for pair in output.errors.windows(2) {
            prop_assert!(pair[0].span.precedes(pair[1].span));
        }
    }
}

#[test]
fn test_operator_round_trip() {
    let source = "( ) { } , . ; + - * / ! != = == < <= > >= and class else false for fun if nil or print return super this true var while";
    let output = scan(source);
    let lexemes: Vec<_> = output
        .tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(|t| t.lexeme.as_str())
        .collect();
    let words: Vec<_> = source.split_whitespace().collect();
    assert_eq!(lexemes, words);
}
