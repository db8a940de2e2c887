//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position, Side};
use tracing::instrument;

/// Every line that wins the game, in evaluation order:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Returns the first complete line of `side`'s marks, if any.
pub fn winning_line(board: &Board, side: Side) -> Option<[Position; 3]> {
    let mark = Cell::Occupied(side);
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// X is checked before O. On boards reachable by alternating play at
/// most one side can hold a complete line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Side> {
    [Side::X, Side::O]
        .into_iter()
        .find(|side| winning_line(board, *side).is_some())
}
