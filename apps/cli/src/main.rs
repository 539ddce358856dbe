mod args;
mod commands;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use geofeed_domain::config::{AppConfig, LoggingConfig, MAX_PRECISION};
use geofeed_kernel::config::load_config;
use geofeed_logger::{LevelFilter, Logger, parse_level};
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = settings(&cli)?;
    let _logger = init_logger(&config.logging, &cli)?;

    let inputs = if cli.command.inputs().is_empty() {
        read_stdin_lines()?
    } else {
        cli.command.inputs().to_vec()
    };
    debug!(count = inputs.len(), "Processing inputs");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let failures =
        commands::run(&cli.command, &inputs, &config.output, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Loads the configuration file and environment, then applies command-line overrides.
fn settings(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if let Some(precision) = cli.precision {
        config.output.precision = precision;
    }

    anyhow::ensure!(
        config.output.precision <= MAX_PRECISION,
        "Precision {} exceeds the maximum of {MAX_PRECISION}",
        config.output.precision
    );

    Ok(config)
}

fn init_logger(logging: &LoggingConfig, cli: &Cli) -> anyhow::Result<Option<Logger>> {
    let level = if cli.quiet {
        LevelFilter::ERROR
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        parse_level(&logging.level)?
    };

    if !logging.console && logging.directory.is_none() {
        return Ok(None);
    }

    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).console(logging.console).level(level);
    let logger = match &logging.directory {
        Some(dir) => builder.path(dir).json(logging.json).init()?,
        None => builder.init()?,
    };

    Ok(Some(logger))
}

/// One input per non-blank line.
fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .collect()
}
