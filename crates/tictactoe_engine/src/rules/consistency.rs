//! Consistency checks for boards supplied at game creation.

use super::win::winning_line;
use crate::{Board, GameError, Side};
use tracing::{instrument, warn};

/// Validates a caller-supplied board and returns the side to move next.
///
/// The mark counts must differ by at most one, and at most one side may
/// hold a complete line. The side with fewer marks moves next; X moves
/// when the counts are equal.
///
/// # Errors
///
/// Returns [`GameError::InvalidBoardState`] if either check fails.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn validate_initial_board(board: &Board) -> Result<Side, GameError> {
    let x_count = board.count(Side::X);
    let o_count = board.count(Side::O);

    if x_count.abs_diff(o_count) > 1 {
        warn!(x_count, o_count, "Mark counts differ by more than one");
        return Err(GameError::invalid_board(format!(
            "mark counts differ by more than one (X: {x_count}, O: {o_count})"
        )));
    }

    if winning_line(board, Side::X).is_some() && winning_line(board, Side::O).is_some() {
        warn!("Both sides hold a complete line");
        return Err(GameError::invalid_board("both X and O hold a complete line"));
    }

    Ok(if o_count < x_count { Side::O } else { Side::X })
}
