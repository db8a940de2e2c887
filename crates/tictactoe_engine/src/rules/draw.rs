//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no completed line is a draw.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn is_full(board: &Board) -> bool {
    no_empty_cell(board)
}

/// Uninstrumented fullness check for hot loops such as the minimax search.
pub(crate) fn no_empty_cell(board: &Board) -> bool {
    board.rows().iter().flatten().all(|c| *c != Cell::Empty)
}
