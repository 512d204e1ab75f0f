//! Console front end for N×N tic-tac-toe.
//!
//! # Architecture
//!
//! - **Input**: parses raw lines into sizes and `row,column` positions
//! - **Console**: the prompt → read → validate → apply → render loop
//! - **Render**: draws the board from the engine's cell lookups
//! - **Config**: optional TOML file with the default size and player profiles
//!
//! Game rules live in [`tictactoe_engine`].

mod cli;
mod config;
mod console;
mod input;
mod render;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig, PlayerConfig};

// Crate-level exports - Console driver
pub use console::Console;
pub use input::{InputError, parse_position, parse_size};
pub use render::{EMPTY_CELL, render_board};
