//! Comment lexing.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips the rest of a line comment.
    ///
    /// Called with both slashes already consumed. Stops before the newline so
    /// the main loop still sees it and bumps the line counter.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
