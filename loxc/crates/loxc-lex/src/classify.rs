//! Character classification.
//!
//! [`classify`] maps the first character of a lexeme to the lexeme class the
//! lexer should scan, so the main loop is a single `match`.

use crate::token::TokenKind;

/// Lexeme class selected by the first character of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Space, tab or carriage return
    Whitespace,
    /// `\n`
    Newline,
    /// `/`, either a line comment or SLASH
    Slash,
    /// Letter or underscore
    IdentStart,
    /// ASCII digit
    Digit,
    /// `"`
    Quote,
    /// Operator that may be followed by `=` to form a two-character token
    Compound {
        /// Kind when no `=` follows
        single: TokenKind,
        /// Kind when `=` follows
        with_equal: TokenKind,
    },
    /// Single-character punctuation
    Single(TokenKind),
    /// Anything the language doesn't recognize
    Unknown(char),
}

/// Classifies the first character of a lexeme.
///
/// # Example
///
/// ```
/// use loxc_lex::classify::{classify, CharClass};
/// use loxc_lex::TokenKind;
///
/// assert_eq!(classify('('), CharClass::Single(TokenKind::LeftParen));
/// assert_eq!(classify('_'), CharClass::IdentStart);
/// assert_eq!(classify('@'), CharClass::Unknown('@'));
/// ```
pub fn classify(c: char) -> CharClass {
    match c {
        ' ' | '\t' | '\r' => CharClass::Whitespace,
        '\n' => CharClass::Newline,
        '/' => CharClass::Slash,
        '"' => CharClass::Quote,
        '(' => CharClass::Single(TokenKind::LeftParen),
        ')' => CharClass::Single(TokenKind::RightParen),
        '{' => CharClass::Single(TokenKind::LeftBrace),
        '}' => CharClass::Single(TokenKind::RightBrace),
        ',' => CharClass::Single(TokenKind::Comma),
        '.' => CharClass::Single(TokenKind::Dot),
        ';' => CharClass::Single(TokenKind::Semicolon),
        '+' => CharClass::Single(TokenKind::Plus),
        '-' => CharClass::Single(TokenKind::Minus),
        '*' => CharClass::Single(TokenKind::Star),
        '=' => CharClass::Compound {
            single: TokenKind::Equal,
            with_equal: TokenKind::EqualEqual,
        },
        '!' => CharClass::Compound {
            single: TokenKind::Bang,
            with_equal: TokenKind::BangEqual,
        },
        '<' => CharClass::Compound {
            single: TokenKind::Less,
            with_equal: TokenKind::LessEqual,
        },
        '>' => CharClass::Compound {
            single: TokenKind::Greater,
            with_equal: TokenKind::GreaterEqual,
        },
        c if is_digit(c) => CharClass::Digit,
        c if is_ident_start(c) => CharClass::IdentStart,
        c => CharClass::Unknown(c),
    }
}

/// Returns true for `[0-9]`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for `[A-Za-z_]`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_classes() {
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('\r'), CharClass::Whitespace);
        assert_eq!(classify('\n'), CharClass::Newline);
    }

    #[test]
    fn test_other_whitespace_is_unknown() {
        assert_eq!(classify('\u{0B}'), CharClass::Unknown('\u{0B}'));
        assert_eq!(classify('\u{A0}'), CharClass::Unknown('\u{A0}'));
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(
            classify('<'),
            CharClass::Compound {
                single: TokenKind::Less,
                with_equal: TokenKind::LessEqual
            }
        );
        assert!(matches!(classify('!'), CharClass::Compound { single: TokenKind::Bang, .. }));
    }

    #[test]
    fn test_literal_starts() {
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('a'), CharClass::IdentStart);
        assert_eq!(classify('Z'), CharClass::IdentStart);
        assert_eq!(classify('"'), CharClass::Quote);
    }

    #[test]
    fn test_non_ascii_letters_are_unknown() {
        assert_eq!(classify('é'), CharClass::Unknown('é'));
        assert!(!is_ident_start('é'));
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
    }
}
