//! Computer opponent: minimax search with alpha-beta pruning.

use crate::rules::{compute_status, status_of};
use crate::{Board, Cell, GameStatus, Position, Side};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Score of a win found at the root; each extra ply costs one point.
const WIN_SCORE: i32 = 10;

/// Finds the best move for `side` by exhaustive minimax search.
///
/// Faster wins and slower losses score higher. Among equally scored
/// moves the first one in row-major order is chosen. Returns `None` if
/// the board is already decided or full.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn best_move(board: &Board, side: Side) -> Option<Position> {
    if compute_status(board).is_terminal() {
        return None;
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in board.empty_positions() {
        let mut next = *board;
        next.set(pos, Cell::Occupied(side));
        let score = search(&next, side, side.opponent(), 1, i32::MIN, i32::MAX);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(%pos, score, "Selected move");
    }
    best.map(|(pos, _)| pos)
}

/// Picks a uniformly random empty cell.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

fn search(board: &Board, me: Side, to_move: Side, plies: i32, mut alpha: i32, mut beta: i32) -> i32 {
    match status_of(board) {
        GameStatus::InProgress => {}
        GameStatus::Draw => return 0,
        status @ (GameStatus::XWon | GameStatus::OWon) => {
            return if status.winner() == Some(me) {
                WIN_SCORE - plies
            } else {
                plies - WIN_SCORE
            };
        }
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in board.empty_positions() {
        let mut next = *board;
        next.set(pos, Cell::Occupied(to_move));
        let score = search(&next, me, to_move.opponent(), plies + 1, alpha, beta);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
