//! ComputeContext - CLI entry point

use std::io;

use clap::Parser;
use colored::*;
use eyre::{Context as _, Result};
use tracing::info;

use computecontext::cli::Cli;
use computecontext::config::Config;
use computecontext::demo;

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

    let a = cli.a.unwrap_or(config.a);
    let b = cli.b.unwrap_or(config.b);
    let algorithms = if cli.algorithms.is_empty() {
        config.algorithms
    } else {
        cli.algorithms
    };
    info!(%a, %b, ?algorithms, "computecontext starting");

    let results = demo::run(a, b, &algorithms, &mut io::stdout().lock()).context("Demonstration failed")?;

    println!();
    println!("{} Ran {} algorithms", "✓".green(), results.len().to_string().cyan());

    Ok(())
}
