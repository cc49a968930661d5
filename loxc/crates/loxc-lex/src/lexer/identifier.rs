//! Identifier and keyword lexing.

use crate::classify::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Called with the first letter or underscore already consumed. Reads
    /// `[A-Za-z0-9_]*` and checks the whole lexeme against the reserved
    /// words.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
