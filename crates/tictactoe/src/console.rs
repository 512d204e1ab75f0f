//! The console game loop.
//!
//! Prompts for a board size, then asks each player in turn for a
//! `row,column` position until someone completes a line or the board
//! fills up. Bad input is reported and the same player is asked again;
//! the engine is only touched by moves that passed validation.

use crate::input::{parse_position, parse_size};
use crate::render::render_board;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{Coord, GameEngine, Outcome, Players};
use tracing::{debug, info, instrument, warn};

/// Runs one game over a line-based reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    players: Players,
    default_size: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console for the given roster.
    ///
    /// `default_size` is used when the size prompt is answered blank.
    pub fn new(input: R, output: W, players: Players, default_size: usize) -> Self {
        Self {
            input,
            output,
            players,
            default_size,
        }
    }

    /// Plays a full game and returns how it ended.
    ///
    /// A `size` given up front skips the size prompt.
    ///
    /// # Errors
    ///
    /// Fails if `size` is too small, if input runs out before the game
    /// ends, or if writing to the output fails.
    #[instrument(skip(self))]
    pub fn run(&mut self, size: Option<usize>) -> Result<Outcome> {
        let size = match size {
            Some(size) => size,
            None => self.read_size()?,
        };
        let mut engine =
            GameEngine::new(size, self.players.clone()).context("Invalid board size")?;
        info!(size, "Game started");
        for player in self.players.iter() {
            debug!(seat = %player.seat(), name = %player.name(), symbol = %player.symbol(), "Player seated");
        }

        loop {
            let coord = self.read_move(&engine)?;
            let outcome = engine.apply_move(coord).context("Failed to apply move")?;
            write!(self.output, "{}", render_board(&engine))?;

            match outcome {
                Outcome::Won(seat) => {
                    let name = self.players.get(seat).name();
                    writeln!(self.output, "The winner is {}!", name)?;
                    info!(%seat, moves = engine.history().len(), "Game won");
                    return Ok(outcome);
                }
                Outcome::Draw => {
                    writeln!(self.output, "Draw!")?;
                    info!(moves = engine.history().len(), "Game drawn");
                    return Ok(outcome);
                }
                Outcome::Continue => engine.advance_turn(),
            }
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_size(&mut self) -> Result<usize> {
        loop {
            write!(
                self.output,
                "Enter the size (number) for the game [{}]: ",
                self.default_size
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_size(&line, self.default_size) {
                Ok(size) => return Ok(size),
                Err(e) => {
                    debug!(error = %e, "Size rejected");
                    writeln!(self.output, "Invalid input. {}.", e)?;
                }
            }
        }
    }

    fn read_move(&mut self, engine: &GameEngine) -> Result<Coord> {
        let player = engine.current_player();
        loop {
            write!(
                self.output,
                "Enter the position for {} ({}) in the format 'row,column': ",
                player.name(),
                player.symbol()
            )?;
            self.output.flush()?;
            let line = self.read_line()?;

            let checked = parse_position(&line)
                .map_err(|e| e.to_string())
                .and_then(|(row, col)| engine.validate_move(row, col).map_err(|e| e.to_string()));
            match checked {
                Ok(coord) => return Ok(coord),
                Err(message) => {
                    debug!(%message, input = line.trim(), "Move rejected");
                    writeln!(self.output, "Invalid input. {}.", message)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            warn!("Input closed mid-game");
            bail!("Input closed before the game finished");
        }
        Ok(line)
    }
}
