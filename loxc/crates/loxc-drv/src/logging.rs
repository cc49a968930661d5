//! Logging setup.
//!
//! Events go to stderr so they never interleave with the token listing on
//! stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::{DrvError, Result};

/// Installs the global tracing subscriber for `config`.
///
/// `RUST_LOG`, when set, takes precedence over the configured filter.
pub fn init_logging(config: &Config) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), config.effective_filter())?;

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Logging(e.to_string()))?;

    Ok(())
}

/// Picks the filter directive: the environment's if present and non-empty,
/// otherwise `fallback`.
fn select_directive<'a>(env: Option<&'a str>, fallback: &'a str) -> &'a str {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

fn build_filter(env: Option<&str>, fallback: &str) -> Result<EnvFilter> {
    let directive = select_directive(env, fallback);
    EnvFilter::try_new(directive)
        .map_err(|e| DrvError::Logging(format!("invalid filter `{}`: {}", directive, e)))
}
