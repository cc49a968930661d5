//! Command-line interface definition.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};

use crate::report::Mode;

/// loxc - A scanner for the Lox language
///
/// Prints the tokens of a Lox source file and reports lexical errors.
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A scanner for the Lox language", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(
        short,
        long,
        global = true,
        env = "LOXC_VERBOSE",
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(
        long,
        global = true,
        env = "LOXC_NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every token, one per line
    ///
    /// Each line is `KIND lexeme literal`, with `null` for tokens that carry
    /// no literal. The listing always ends with `EOF  null`.
    Tokenize(FileArgs),

    /// Print the value of every token
    ///
    /// Numbers print as decimals, strings without quotes and everything
    /// else as written. End of file prints nothing.
    Parse(FileArgs),
}

/// Arguments shared by every subcommand.
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Source file to scan
    pub file: PathBuf,
}

impl Commands {
    /// The rendering mode this command selects.
    pub fn mode(&self) -> Mode {
        match self {
            Commands::Tokenize(_) => Mode::Tokenize,
            Commands::Parse(_) => Mode::Parse,
        }
    }

    /// The source file this command reads.
    pub fn file(&self) -> &PathBuf {
        match self {
            Commands::Tokenize(args) | Commands::Parse(args) => &args.file,
        }
    }
}
