//! Kino MultiView CLI - Headless multi-view driver
//!
//! Features:
//! - Replay selection scripts against headless players
//! - Built-in walkthrough of every layout mode
//! - Layout matrix for each selection size

use anyhow::Context;
use clap::{Parser, Subcommand};
use kino_multiview::{MultiViewConfig, TiledModePreference};
use std::path::PathBuf;

mod commands;
mod output;
mod script;

use output::OutputFormat;

/// Kino MultiView CLI - Multi-view selection and layout toolkit
#[derive(Parser)]
#[command(name = "kino-multiview")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Replay multi-view selections and inspect layouts and audio routing", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Four-player arrangement (focused, tiled); overrides the config file
    #[arg(short, long)]
    tiled_mode: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a selection script
    Run {
        /// Script file, one command per line
        script: PathBuf,

        /// Player names available to the script
        #[arg(short, long, value_delimiter = ',', default_value = "A,B,C,D,E,F")]
        players: Vec<String>,
    },

    /// Replay the built-in walkthrough
    Demo,

    /// Show the layout for every selection size
    Layouts,
}

fn load_config(cli: &Cli) -> anyhow::Result<MultiViewConfig> {
    let mut config = match &cli.config {
        Some(path) => MultiViewConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MultiViewConfig::default(),
    };

    if let Some(mode) = &cli.tiled_mode {
        config.tiled_mode = mode.parse::<TiledModePreference>()?;
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    kino_multiview::init();

    let config = load_config(&cli)?;
    let format = OutputFormat::from(cli.format.as_str());

    match &cli.command {
        Commands::Run { script, players } => {
            commands::run(script, players, config, format)?;
        }
        Commands::Demo => {
            commands::demo(config, format)?;
        }
        Commands::Layouts => {
            commands::layouts(format)?;
        }
    }

    Ok(())
}
