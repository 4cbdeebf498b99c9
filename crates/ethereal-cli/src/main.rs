use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ethereal_core::AppConfig;

mod commands;

use commands::simulate::Step;

#[derive(Parser)]
#[command(name = "ethereal")]
#[command(author, version, about = "Terminal rendition of the Ethereal Studios site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/ethereal/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Skip the intro sequence
        #[arg(long)]
        no_preloader: bool,
    },
    /// Drive the carousel headlessly and print the indicator sequence
    Simulate {
        /// Number of items (defaults to the configured testimonials)
        #[arg(short = 'n', long)]
        items: Option<usize>,
        /// Slot width in arbitrary units
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        /// Steps to run: next, prev, select:N, tick, wait:MS, drag:DX
        steps: Vec<Step>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // The TUI owns the terminal, so its logs go to a file
    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run { no_preloader }) => {
            let mut config = config;
            if no_preloader {
                config.preloader.enabled = false;
            }
            commands::run::run(Arc::new(config)).await
        }
        None => commands::run::run(Arc::new(config)).await,
        Some(Commands::Simulate {
            items,
            width,
            steps,
            json,
        }) => commands::simulate::run(&config, items, width, steps, json),
        Some(Commands::Config { init }) => commands::config::run(&config, &config_path, init),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        let file = open_log(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn open_log(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
