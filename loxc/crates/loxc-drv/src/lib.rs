//! loxc-drv - Scanner Driver
//!
//! Ties the pieces of a run together: command-line parsing, configuration,
//! logging, reading the source file, scanning it and printing the result.
//!
//! ```no_run
//! use clap::Parser;
//! use loxc_drv::{run_with, Cli};
//!
//! let cli = Cli::parse_from(["loxc", "tokenize", "hello.lox"]);
//! let mut listing = Vec::new();
//! let status = run_with(&cli, &mut listing, std::io::stderr()).unwrap();
//! print!("{}", String::from_utf8_lossy(&listing));
//! std::process::exit(status.into());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod session;

use std::io::Write;

use tracing::info;

pub use cli::{Cli, Commands, FileArgs};
pub use config::Config;
pub use error::{DrvError, Result};
pub use logging::init_logging;
pub use report::{exit_status, Mode, Reporter, EXIT_DATA_ERR};
pub use session::Session;

/// Resolves configuration for `cli`: the file (if any) with flags applied.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    Ok(Config::resolve(cli.config.as_deref())?.with_overrides(cli.verbose, cli.no_color))
}

/// Runs the selected command, writing the listing to `out` and lexical
/// errors to `err`.
///
/// Returns the exit status: `0`, or [`EXIT_DATA_ERR`] when the source has
/// lexical errors.
pub fn run_with<O: Write, E: Write>(cli: &Cli, out: O, err: E) -> Result<u8> {
    let mode = cli.command.mode();
    let mut session = Session::open(cli.command.file())?;
    let output = session.scan();

    let mut reporter = Reporter::new(out, err);
    reporter.report(mode, &output)?;

    let status = exit_status(&output);
    if status != 0 {
        info!(errors = output.errors.len(), "lexical errors found");
    }
    Ok(status)
}
