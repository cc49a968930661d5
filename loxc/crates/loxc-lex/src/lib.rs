//! loxc-lex - Lexical Analyzer for Lox
//!
//! This crate turns Lox source text into an ordered sequence of tokens plus
//! the lexical errors found along the way. A scan never stops early: a bad
//! character or an unterminated string is recorded and scanning resumes with
//! the next character.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, TokenKind};
//!
//! let output = scan("var answer = 42; @");
//!
//! let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert_eq!(output.errors.len(), 1);
//! assert_eq!(output.errors[0].message, "Unexpected character: @");
//! ```
//!
//! For incremental use, construct a [`Lexer`] over a
//! [`Handler`](loxc_util::Handler) and pull tokens with
//! [`Lexer::next_token`] or through its `Iterator` implementation.
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and tokens
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classification
//! - [`error`] - Lexical error types
//!
//! # Token Categories
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `.` `;` `+` `-` `*` `/`
//! - **Comparison and assignment**: `!` `!=` `=` `==` `<` `<=` `>` `>=`
//! - **Literals**: identifiers, `"strings"` (no escapes), numbers (`12`, `3.5`)
//! - **Keywords**: `and` `class` `else` `false` `for` `fun` `if` `nil` `or`
//!   `print` `return` `super` `this` `true` `var` `while`
//! - **EOF**: end of input marker, always last
//!
//! Comments run from `//` to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use loxc_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexErrorKind, ScanError};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Literal, Token, TokenKind};

/// The result of scanning one source buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, ending with exactly one EOF token.
    pub tokens: Vec<Token>,
    /// Lexical errors in source order.
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    /// Returns true if any lexical error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scans `source` into tokens and lexical errors.
///
/// Never fails: every problem becomes an entry in [`ScanOutput::errors`].
pub fn scan(source: &str) -> ScanOutput {
    let mut handler = Handler::new();
    let tokens = Lexer::new(source, &mut handler).collect();
    let errors = handler
        .take_diagnostics()
        .into_iter()
        .map(ScanError::from)
        .collect();

    ScanOutput { tokens, errors }
}
