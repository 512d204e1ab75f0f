//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player N×N tic-tac-toe on the text console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player N×N tic-tac-toe on the text console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size; skips the size prompt when given
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,
}
