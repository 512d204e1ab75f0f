//! Text rendering of the board.

use tictactoe_engine::{GameEngine, Square};

/// Placeholder drawn for an empty cell.
pub const EMPTY_CELL: char = '.';

/// Formats the board as `size` lines of space-separated symbols.
pub fn render_board(engine: &GameEngine) -> String {
    // Sizes are bounded by MAX_SIZE, so the conversion never saturates.
    let size = i64::try_from(engine.size()).unwrap_or(i64::MAX);
    let players = engine.players();
    let mut result = String::new();
    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| match engine.current_cell(row, col) {
                Square::Empty => EMPTY_CELL.to_string(),
                Square::Occupied(seat) => players.get(seat).symbol().to_string(),
            })
            .collect();
        result.push_str(&cells.join(" "));
        result.push('\n');
    }
    result
}
