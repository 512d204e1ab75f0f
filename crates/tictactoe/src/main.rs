//! Tic-tac-toe console game.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Console, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument(skip_all, fields(config = %cli.config.display(), size = ?cli.size))]
fn run(cli: Cli) -> Result<()> {
    let config = GameConfig::load_or_default(&cli.config).context("Failed to load config")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        config.players(),
        *config.default_size(),
    );

    let outcome = console.run(cli.size)?;
    info!(%outcome, "Game finished");
    Ok(())
}
