//! tictactoe - play against a random computer opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, GameConfig, StdConsole, build_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli).context("Failed to load configuration")?;
    info!(?config, "Starting tictactoe");

    let mut session = build_session(&config, StdConsole::new()).context("Invalid starting board")?;
    let state = session.run().context("Session ended early")?;
    info!(%state, "Game over");
    Ok(())
}
