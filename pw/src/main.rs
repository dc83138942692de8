//! ProgressWalk - CLI entry point

use std::io;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use progresswalk::cli::Cli;
use progresswalk::config::Config;
use progresswalk::{Direction, demo};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: &str) -> Result<()> {
    // Priority: CLI --log-level > config file
    let level_str = cli_log_level.unwrap_or(config_log_level);
    let level = match level_str.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", level_str);
            tracing::Level::WARN
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), &config.log_level).context("Failed to setup logging")?;

    let direction = cli.reverse.unwrap_or_else(|| Direction::from_reverse(config.reverse));
    info!(%direction, "progresswalk starting");

    let summary = demo::run(&cli.text, direction, &config, &mut io::stdout().lock()).context("Walk failed")?;

    println!(
        "{} Walked {} words {} ({}%)",
        "✓".green(),
        summary.words.to_string().cyan(),
        summary.direction,
        summary.final_percent
    );

    Ok(())
}
