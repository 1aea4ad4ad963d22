mod cli;
mod commands;
mod error;
mod report;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Analyze(args) => commands::analyze::run(args, cli.format, cli.pretty)?,
        Command::Baseline(args) => commands::baseline::run(args, cli.format, cli.pretty)?,
    }

    Ok(ExitCode::SUCCESS)
}

// Logs go to stderr so stdout stays clean for the summary output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,voltick=info,voltick_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
