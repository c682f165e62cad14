//! ShortsGen CLI
//!
//! A command-line client for a YouTube-to-shorts backend service: fetch
//! video metadata, trigger clip generation, and browse or save the
//! resulting shorts.
//!
//! # Usage
//!
//! ```bash
//! shortsgen info --url "https://www.youtube.com/watch?v=..."
//! shortsgen download --url "https://www.youtube.com/watch?v=..."
//! shortsgen generate --video-path /tmp/video.mp4 --max-duration 60
//! shortsgen save --id short_1 --output short_1.mp4
//! shortsgen wizard
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use shortsgen_cli::app::AppContainer;
use shortsgen_cli::cli::{commands, Cli, Commands};
use shortsgen_cli::config::Settings;
use shortsgen_cli::utils::logging;

/// Main entry point for the ShortsGen CLI application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init(&cli.log_level);
    info!("Starting ShortsGen CLI");

    // Load settings and apply CLI overrides
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(api_base) = &cli.api_base {
        settings.api_base_url = api_base.clone();
    }
    info!("Using backend at {}", settings.api_base_url);

    // Wire the backend adapter into the use cases
    let container =
        AppContainer::from_settings(&settings).context("Failed to initialize backend client")?;

    // Execute the requested command
    match cli.command {
        Commands::Info(args) => commands::info(args, &container, cli.json).await?,
        Commands::Download(args) => commands::download(args, &container, cli.json).await?,
        Commands::Generate(args) => commands::generate(args, &container, cli.json).await?,
        Commands::Save(args) => commands::save(args, &container).await?,
        Commands::Wizard(args) => commands::wizard(args, &container, &settings).await?,
    }

    info!("ShortsGen CLI completed successfully");
    Ok(())
}
