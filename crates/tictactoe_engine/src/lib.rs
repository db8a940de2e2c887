//! Tic-tac-toe game-state engine.
//!
//! Pure rules model: validates moves, tracks turn order and detects
//! terminal outcomes. The engine performs no I/O and holds no
//! process-wide state; callers own each [`Game`] and hand it to the
//! engine for every transition.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Side};
//!
//! # fn main() -> Result<(), tictactoe_engine::GameError> {
//! let mut game = Game::create(None, Side::X)?;
//! assert_eq!(game.turn(), Side::X);
//!
//! let status = game.apply_move(1, 1, Side::X)?;
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(game.turn(), Side::O);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod minimax;
mod position;
mod rules;
mod types;

pub use error::GameError;
pub use game::{Game, GameId, Move};
pub use minimax::{best_move, random_move};
pub use position::Position;
pub use rules::{LINES, check_winner, compute_status, is_full, validate_initial_board, winning_line};
pub use types::{Board, Cell, GameStatus, ParseBoardError, Side};

/// Alias used where the symbol placed on the board is meant.
pub type Mark = Side;
