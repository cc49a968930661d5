//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are collected by a [`Handler`] instead of being printed
//! immediately, so a phase can keep going after a failure and the driver
//! decides afterwards how to render them and which exit status to use.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use loxc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unterminated string.")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 3))
//!     .emit(&handler);
//!
//! for diag in handler.diagnostics() {
//!     assert_eq!(diag.to_string(), "[line 3] Error: Unterminated string.");
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A lexical error with its location
///
/// The `Display` rendering is the one-line form used on stderr:
/// `[line <n>] Error: <message>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Attach a diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// The 1-based line this diagnostic points at
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.span.line, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// Diagnostics are kept in emission order.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Handler};
/// use loxc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unexpected character: @", Span::new(0, 1, 1)));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all collected diagnostics
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("Unexpected character: $", Span::new(5, 6, 2));
        assert_eq!(diag.to_string(), "[line 2] Error: Unexpected character: $");
        assert_eq!(diag.line(), 2);
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_keeps_emission_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("first", Span::new(0, 1, 1)));
        handler.emit_diagnostic(Diagnostic::error("second", Span::new(2, 3, 1)));
        handler.emit_diagnostic(Diagnostic::error("third", Span::new(4, 5, 2)));

        let messages: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn test_handler_take_diagnostics() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(!handler.has_errors());
        assert!(handler.take_diagnostics().is_empty());
    }
}
