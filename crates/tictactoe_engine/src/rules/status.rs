//! Status computation.

use super::draw::no_empty_cell;
use super::win::winning_line;
use crate::{Board, GameStatus, Side};
use tracing::{debug, instrument};

/// Derives the status of a board.
///
/// Any complete line of X gives `XWon`, otherwise any complete line of O
/// gives `OWon`. With no complete line a full board is a `Draw`, anything
/// else is `InProgress`.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn compute_status(board: &Board) -> GameStatus {
    let status = status_of(board);
    debug!(%status, "Computed status");
    status
}

/// Uninstrumented status evaluation for hot loops such as the minimax search.
pub(crate) fn status_of(board: &Board) -> GameStatus {
    if winning_line(board, Side::X).is_some() {
        GameStatus::XWon
    } else if winning_line(board, Side::O).is_some() {
        GameStatus::OWon
    } else if no_empty_cell(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
