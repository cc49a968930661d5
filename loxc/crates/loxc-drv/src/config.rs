//! Configuration for the loxc driver.
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags. A missing default file is not an error; a missing file named with
//! `--config` is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DrvError, Result};

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "loxc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Raise the log level to `debug`.
    #[serde(default)]
    pub verbose: bool,

    /// Use ANSI colors in log output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Filter directive used when `RUST_LOG` is unset and `verbose` is off.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads `loxc.toml` from the current directory, or the defaults when
    /// there is no such file.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DrvError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Resolves the configuration for a run: the explicit path if given,
    /// otherwise the default lookup.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Applies command-line flags on top of file values.
    ///
    /// Flags only ever switch behavior on: `--verbose` enables verbose
    /// logging and `--no-color` disables color, whatever the file says.
    pub fn with_overrides(mut self, verbose: bool, no_color: bool) -> Self {
        self.verbose |= verbose;
        if no_color {
            self.color = false;
        }
        self
    }

    /// The log filter directive this configuration asks for.
    pub fn effective_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_filter
        }
    }

    fn find_config_file() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
