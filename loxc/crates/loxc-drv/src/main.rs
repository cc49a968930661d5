use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use loxc_drv::{init_logging, resolve_config, run_with, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<u8> {
    let config = resolve_config(cli).context("could not load configuration")?;
    init_logging(&config)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = run_with(cli, stdout.lock(), stderr.lock())
        .with_context(|| format!("could not scan {}", cli.command.file().display()))?;
    Ok(status)
}
