use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use attendance_cli::commands::{check, report, util};
use attendance_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(Commands::Report { input, json }) => {
            let events = util::read_input(input.input.as_deref())?;
            report::run(&mut stdout, &events, config.attendance(input.min_duration)?, json)?;
        }
        Some(Commands::Check { input }) => {
            let events = util::read_input(input.input.as_deref())?;
            check::run(&mut stdout, &events, config.attendance(input.min_duration)?)?;
        }
        None => {
            let events = util::read_input(None)?;
            report::run(&mut stdout, &events, config.attendance(None)?, false)?;
        }
    }

    Ok(())
}
