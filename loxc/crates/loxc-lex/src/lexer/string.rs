//! String literal lexing.

use crate::error::LexErrorKind;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Called with the opening quote already consumed. The literal is the
    /// text between the quotes exactly as written: there are no escape
    /// sequences, and newlines are allowed (the cursor counts them).
    ///
    /// # Returns
    ///
    /// `None` if the input ends before the closing quote; the error is
    /// reported on the line the string started on.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        let content_start = self.cursor.position();
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(LexErrorKind::UnterminatedString);
            return None;
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance();

        Some(self.make_literal_token(TokenKind::String, Some(Literal::Str(content))))
    }
}
