//! A single driver run over one source file.

use std::path::{Path, PathBuf};

use loxc_lex::{Lexer, ScanError, ScanOutput};
use loxc_util::Handler;
use tracing::debug;

use crate::error::{DrvError, Result};

/// Scanning session: source text and the diagnostic handler the lexer
/// reports into.
pub struct Session {
    path: PathBuf,
    source: String,
    handler: Handler,
}

impl Session {
    /// Reads `path` and creates a session for it.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; the replacement
    /// characters then surface as unexpected-character errors.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| DrvError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read source file");

        let source = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::from_source(path, source))
    }

    /// Creates a session over in-memory source text.
    pub fn from_source(path: impl Into<PathBuf>, source: String) -> Self {
        Self {
            path: path.into(),
            source,
            handler: Handler::new(),
        }
    }

    /// Path the source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The source text being scanned.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scans the source, draining the handler into the returned errors.
    pub fn scan(&mut self) -> ScanOutput {
        let tokens: Vec<_> = Lexer::new(&self.source, &mut self.handler).collect();
        let errors: Vec<ScanError> = self
            .handler
            .take_diagnostics()
            .into_iter()
            .inspect(|d| debug!(line = d.line(), code = ?d.code, "{}", d.message))
            .map(ScanError::from)
            .collect();

        debug!(
            path = %self.path.display(),
            tokens = tokens.len(),
            errors = errors.len(),
            "scan finished"
        );

        ScanOutput { tokens, errors }
    }
}
