//! Edge case tests for loxc-lex

use crate::{scan, Literal, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).tokens.into_iter().map(|t| t.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_char_ident() {
    let output = scan("x");
    assert_eq!(output.tokens[0].kind, TokenKind::Identifier);
    assert_eq!(output.tokens[0].lexeme, "x");
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let output = scan(&format!("var {} = 1;", name));
    assert_eq!(output.tokens[1].lexeme, name);
}

#[test]
fn test_edge_long_comment() {
    let source = format!("//{}\n;", "x".repeat(10000));
    assert_eq!(kinds(&source), vec![TokenKind::Semicolon, TokenKind::Eof]);
}

#[test]
fn test_edge_adjacent_tokens_without_spaces() {
    assert_eq!(
        kinds("print(a+1)*2;"),
        vec![
            TokenKind::Print,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_edge_slash_then_comment() {
    assert_eq!(kinds("/ //x"), vec![TokenKind::Slash, TokenKind::Eof]);
}

#[test]
fn test_edge_comment_without_newline_then_eof_line() {
    let output = scan("// only a comment");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].line, 1);
}

#[test]
fn test_edge_crlf_line_endings() {
    let output = scan("a\r\nb\r\n");
    assert!(output.errors.is_empty());
    assert_eq!(output.tokens[1].line, 2);
    assert_eq!(output.tokens[2].line, 3);
}

#[test]
fn test_edge_non_ascii_character() {
    let output = scan("a é b");
    assert_eq!(
        kinds("a é b"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].message, "Unexpected character: é");
    assert_eq!(output.errors[0].span.len(), 'é'.len_utf8());
}

#[test]
fn test_edge_non_ascii_inside_string() {
    let output = scan("\"héllo wörld\"");
    assert!(output.errors.is_empty());
    assert_eq!(output.tokens[0].literal, Some(Literal::Str("héllo wörld".into())));
}

#[test]
fn test_edge_nul_character() {
    let output = scan("a\0b");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.tokens.len(), 3);
}

#[test]
fn test_edge_unterminated_after_newlines() {
    let output = scan("\n\n\"never closed\n");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].line, 4);
    assert_eq!(output.errors[0].line, 3);
}

#[test]
fn test_edge_many_errors_in_a_row() {
    let output = scan("@#$%^&");
    assert_eq!(output.errors.len(), 6);
    assert_eq!(output.tokens.len(), 1);
}

#[test]
fn test_edge_keywords_back_to_back() {
    assert_eq!(
        kinds("and or"),
        vec![TokenKind::And, TokenKind::Or, TokenKind::Eof]
    );
    assert_eq!(kinds("andor"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_edge_number_followed_by_keyword() {
    assert_eq!(
        kinds("1.5and"),
        vec![TokenKind::Number, TokenKind::And, TokenKind::Eof]
    );
}

#[test]
fn test_edge_zero() {
    let output = scan("0 0.0");
    assert_eq!(output.tokens[0].value(), "0.0");
    assert_eq!(output.tokens[1].value(), "0.0");
}

#[test]
fn test_edge_spans_cover_lexemes() {
    let source = "fun f(a) { return a >= 1.25; } // done";
    let output = scan(source);
    for token in &output.tokens {
        assert_eq!(token.span.slice(source), token.lexeme);
    }
}
