// CLI - command-line argument parsing and config handlers
//
// Flags override the config file; the `config` subcommand manages the file
// itself (--show, --path, --reset).

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

/// Scroll-driven collapsing header screen for the terminal
#[derive(Parser)]
#[command(name = "headline")]
#[command(version = VERSION)]
#[command(about = "Scroll-driven collapsing header screen", long_about = None)]
pub struct Cli {
    /// Large title text
    #[arg(long)]
    pub title: Option<String>,

    /// Number of list rows to generate
    #[arg(long)]
    pub items: Option<usize>,

    /// Theme name (dark, light, nord)
    #[arg(long)]
    pub theme: Option<String>,

    /// Render tick interval in milliseconds
    #[arg(long)]
    pub tick_rate: Option<u64>,

    /// Cross-fade duration in milliseconds
    #[arg(long)]
    pub fade_ms: Option<u64>,

    /// Path to an alternate config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Write a fresh config file with commented defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Apply CLI flags on top of the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref title) = self.title {
            config.title = title.clone();
        }
        if let Some(items) = self.items {
            config.items = items;
        }
        if let Some(ref theme) = self.theme {
            config.theme = theme.clone();
        }
        if let Some(tick) = self.tick_rate {
            config.tick_rate_ms = tick;
        }
        if let Some(fade) = self.fade_ms {
            config.fade_ms = fade;
        }
    }
}

/// Handle the `config` subcommand. Returns true if a command was handled
/// (the caller should exit without starting the TUI).
pub fn handle_command(cli: &Cli, config: &Config) -> Result<bool> {
    let Some(Commands::Config { show, path, reset }) = &cli.command else {
        return Ok(false);
    };

    let file_path = cli
        .config
        .clone()
        .or_else(Config::default_path)
        .context("Could not determine config directory")?;

    if *path {
        println!("{}", file_path.display());
    } else if *show {
        print!("{}", config.to_display_toml());
    } else if *reset {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&file_path, Config::template())
            .with_context(|| format!("Failed to write {}", file_path.display()))?;
        println!("Wrote {}", file_path.display());
    } else {
        println!("Usage: headline config [--show|--path|--reset]");
    }

    Ok(true)
}
