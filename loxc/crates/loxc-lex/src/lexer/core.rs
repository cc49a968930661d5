//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use loxc_util::{DiagnosticBuilder, Handler, Span};

use crate::classify::{classify, CharClass};
use crate::cursor::Cursor;
use crate::error::LexErrorKind;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for Lox source code.
///
/// The lexer owns all the state of one scan, so independent lexers never
/// interfere with each other. Lexical errors go to the [`Handler`] and the
/// scan carries on with the next character.
///
/// # Example
///
/// ```
/// use loxc_util::Handler;
/// use loxc_lex::{Lexer, TokenKind};
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("print 1;", &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Print);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Starting position of the current lexeme (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current lexeme starts (1-based).
    pub(crate) token_start_line: u32,

    /// Whether the iterator has already yielded the EOF token.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace, comments and failing lexemes produce no token; the loop
    /// keeps scanning until a token is produced or the input runs out. Once
    /// the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        while !self.cursor.is_at_end() {
            self.begin_token();
            if let Some(token) = self.scan_lexeme() {
                return token;
            }
        }

        self.begin_token();
        Token::eof(Span::point(self.token_start, self.token_start_line))
    }

    /// Consumes one lexeme and returns the token it produced, if any.
    fn scan_lexeme(&mut self) -> Option<Token> {
        let c = self.cursor.current_char();
        self.cursor.advance();

        match classify(c) {
            // The cursor already counted the newline.
            CharClass::Whitespace | CharClass::Newline => None,
            CharClass::Slash => self.lex_slash(),
            CharClass::IdentStart => Some(self.lex_identifier()),
            CharClass::Digit => Some(self.lex_number()),
            CharClass::Quote => self.lex_string(),
            CharClass::Compound { single, with_equal } => {
                Some(self.lex_compound(single, with_equal))
            },
            CharClass::Single(kind) => Some(self.make_token(kind)),
            CharClass::Unknown(c) => {
                self.report_error(LexErrorKind::UnexpectedCharacter(c));
                None
            },
        }
    }

    /// Marks the cursor position as the start of the next lexeme.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
    }

    /// Span of the lexeme scanned so far.
    pub(crate) fn current_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position(), self.token_start_line)
    }

    /// Builds a token without a literal from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make_literal_token(kind, None)
    }

    /// Builds a token from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        Token::new(kind, lexeme, literal, self.current_span())
    }

    /// Reports a lexical error for the current lexeme.
    pub(crate) fn report_error(&mut self, kind: LexErrorKind) {
        DiagnosticBuilder::error(kind.to_string())
            .code(kind.code())
            .span(self.current_span())
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token including the trailing EOF, then `None`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_token_repeats_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(";", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_iterator_yields_single_eof() {
        let mut handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("( )", &mut handler).map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("", &mut handler);
        assert!(lexer.next().map(|t| t.is_eof()).unwrap_or(false));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_unknown_character_reported_and_skipped() {
        let mut handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("+ # -", &mut handler).map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Eof]);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Unexpected character: #");
        assert_eq!(diags[0].span, Span::new(2, 3, 1));
    }

    #[test]
    fn test_position_and_line() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a\nb", &mut handler);
        assert_eq!(lexer.line(), 1);
        let _ = lexer.next_token();
        assert_eq!(lexer.position(), 1);
        let b = lexer.next_token();
        assert_eq!(b.line, 2);
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn test_eof_span_is_end_of_source() {
        let mut handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("x\n\n", &mut handler).collect();
        let eof = &tokens[tokens.len() - 1];
        assert_eq!(eof.span, Span::point(3, 3));
        assert_eq!(eof.line, 3);
        assert_eq!(eof.lexeme, "");
    }
}
