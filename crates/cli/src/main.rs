//! ParkSpot CLI - find parking lots and manage your session

mod commands;
mod config;
mod logging;
mod render;
mod shell;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use config::Settings;
use std::path::PathBuf;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "parkspot")]
#[command(about = "Find parking lots and manage your ParkSpot session")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Configuration file, applied over any discovered parkspot.toml
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into(), cli.log_file.clone())?;

    info!("Starting ParkSpot CLI");

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }

    let command = cli.command.unwrap_or(Commands::Shell);
    match command.execute(settings).await {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
