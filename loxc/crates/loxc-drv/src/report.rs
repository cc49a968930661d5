//! Rendering of scan results.

use std::io::Write;

use loxc_lex::{ScanError, ScanOutput, Token, TokenKind};

/// What the driver prints for each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `KIND lexeme literal` for every token, EOF included.
    Tokenize,
    /// The decoded value of every token except EOF.
    Parse,
}

/// Process exit status for lexical errors, following the BSD `EX_DATAERR`
/// convention.
pub const EXIT_DATA_ERR: u8 = 65;

/// Writes listings to `out` and diagnostics to `err`.
pub struct Reporter<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// Creates a reporter over the given writers.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Writes the full report for one scan: the listing first, then every
    /// error in source order.
    pub fn report(&mut self, mode: Mode, output: &ScanOutput) -> std::io::Result<()> {
        for token in &output.tokens {
            self.write_token(mode, token)?;
        }
        self.out.flush()?;

        for error in &output.errors {
            self.write_error(error)?;
        }
        self.err.flush()
    }

    fn write_token(&mut self, mode: Mode, token: &Token) -> std::io::Result<()> {
        match mode {
            Mode::Tokenize => writeln!(self.out, "{}", token),
            Mode::Parse if token.kind == TokenKind::Eof => Ok(()),
            Mode::Parse => writeln!(self.out, "{}", token.value()),
        }
    }

    fn write_error(&mut self, error: &ScanError) -> std::io::Result<()> {
        writeln!(self.err, "{}", error)
    }

    /// Consumes the reporter, returning its writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// The exit status for a finished scan: `0`, or [`EXIT_DATA_ERR`] when any
/// lexical error was recorded.
pub fn exit_status(output: &ScanOutput) -> u8 {
    if output.has_errors() {
        EXIT_DATA_ERR
    } else {
        0
    }
}
