// headline - scroll-driven collapsing header for the terminal
//
// A single-screen TUI mirroring the mobile navigation pattern where a large
// title shrinks into a compact inline toolbar title as the list scrolls.
//
// Architecture:
// - detect: per-frame header measurement, edge-triggered boundary signal
// - state: shared showing_scrolled_title flag with synchronous observers
// - anim: eased cross-fade driving the compact title's opacity
// - tui: ratatui event loop, components, theme, scroll and input handling
// - config/cli/logging: ambient plumbing (file config, flags, in-TUI logs)

mod anim;
mod cli;
mod config;
mod detect;
mod logging;
mod state;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    if cli::handle_command(&cli, &config)? {
        return Ok(());
    }

    // Logs go to an in-memory buffer, never to stdout: the alternate screen
    // owns the terminal while the TUI runs.
    let log_buffer = LogBuffer::new();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("headline=debug")))
        .with(TuiLogLayer::new(log_buffer.clone()))
        .init();

    tracing::info!("headline v{VERSION}");

    tui::run_tui(config, log_buffer).await
}
