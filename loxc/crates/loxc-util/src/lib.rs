//! loxc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the loxc workspace:
//!
//! - [`span`] - Byte ranges and line numbers for source locations
//! - [`diagnostic`] - Error reporting (`Diagnostic`, `Handler`,
//!   `DiagnosticBuilder`, `DiagnosticCode`)
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: @")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 1] Error: Unexpected character: @"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Span;
