//! Number literal lexing.

use crate::classify::is_digit;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Called with the first digit already consumed. Accepts `digits` or
    /// `digits.digits`; a `.` only belongs to the number when a digit
    /// follows it, and only one fractional part is taken, so `1.2.3` lexes
    /// as `1.2`, `.`, `3`.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let text = self.cursor.slice_from(self.token_start);
        // `digits[.digits]` always parses; overly long inputs saturate to inf.
        let value = text.parse::<f64>().unwrap_or(f64::INFINITY);
        self.make_literal_token(TokenKind::Number, Some(Literal::Number(value)))
    }
}
