//! Lexical error types.

use std::fmt;

use loxc_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// The two ways a lexeme can fail to scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string literal reached the end of input without a closing quote.
    UnterminatedString,
    /// A character that starts no known lexeme.
    UnexpectedCharacter(char),
}

impl LexErrorKind {
    /// Diagnostic code for this kind of error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "Unterminated string."),
            LexErrorKind::UnexpectedCharacter(c) => write!(f, "Unexpected character: {}", c),
        }
    }
}

/// A lexical error recorded during a scan.
///
/// # Example
///
/// ```
/// use loxc_lex::scan;
///
/// let output = scan("@");
/// assert_eq!(output.errors[0].to_string(), "[line 1] Error: Unexpected character: @");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {message}")]
pub struct ScanError {
    /// Line the failing lexeme started on (1-based)
    pub line: u32,
    /// Human-readable message
    pub message: String,
    /// Byte range of the failing lexeme
    pub span: Span,
    /// Diagnostic code identifying the kind of failure
    pub code: Option<DiagnosticCode>,
}

impl ScanError {
    /// Returns true if this error is an unterminated string.
    pub fn is_unterminated_string(&self) -> bool {
        self.code == Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
    }

    /// Returns true if this error is an unexpected character.
    pub fn is_unexpected_character(&self) -> bool {
        self.code == Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    }
}

impl From<Diagnostic> for ScanError {
    fn from(diag: Diagnostic) -> Self {
        Self {
            line: diag.span.line,
            message: diag.message,
            span: diag.span,
            code: diag.code,
        }
    }
}
