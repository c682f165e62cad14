//! CLI module for ShortsGen
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// ShortsGen CLI
///
/// A command-line client for a YouTube-to-shorts backend: look up video
/// metadata, generate short-form clips, and browse or save the results,
/// step by step or through the interactive wizard.
#[derive(Parser)]
#[command(name = "shortsgen")]
#[command(about = "ShortsGen - turn YouTube videos into short-form clips")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Backend API base URL
    #[arg(long, env = "SHORTSGEN_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Path to a TOML settings file
    #[arg(long, env = "SHORTSGEN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch metadata for a YouTube video
    Info(args::InfoArgs),
    /// Ask the backend to download a source video into its storage
    Download(args::DownloadArgs),
    /// Generate short clips from a source video
    Generate(args::GenerateArgs),
    /// Save a generated short to a local file
    Save(args::SaveArgs),
    /// Walk through the whole flow interactively
    Wizard(args::WizardArgs),
}
