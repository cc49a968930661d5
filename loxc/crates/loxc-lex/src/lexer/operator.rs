//! Operator lexing.
//!
//! Handles the operators whose meaning depends on the next character.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes slash or a line comment.
    ///
    /// Handles: `/`, `//`. Returns `None` for a comment.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenKind::Slash))
    }

    /// Lexes an operator that may absorb a following `=`.
    ///
    /// Handles: `=`, `==`, `!`, `!=`, `<`, `<=`, `>`, `>=`
    pub(crate) fn lex_compound(&mut self, single: TokenKind, with_equal: TokenKind) -> Token {
        if self.cursor.match_char('=') {
            self.make_token(with_equal)
        } else {
            self.make_token(single)
        }
    }
}
