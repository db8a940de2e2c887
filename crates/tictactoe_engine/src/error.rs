//! Engine error types.

use crate::{GameStatus, Position, Side};

/// Validation failure from the engine.
///
/// Every variant is a recoverable caller error. A failed operation leaves
/// the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The initial board handed to `create` cannot arise from alternating play.
    #[display("Invalid board state: {reason}")]
    InvalidBoardState {
        /// What is wrong with the board.
        reason: String,
    },

    /// The game already reached a terminal status.
    #[display("Game is already over ({status})")]
    GameAlreadyOver {
        /// Terminal status of the game.
        status: GameStatus,
    },

    /// Row or column outside `0..3`.
    #[display("Position ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell {position} is already occupied")]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },

    /// The side moving is not the side whose turn it is.
    #[display("It's not {actual}'s turn; {expected} to move")]
    WrongTurn {
        /// Side whose turn it is.
        expected: Side,
        /// Side that tried to move.
        actual: Side,
    },
}

impl GameError {
    /// Creates an [`GameError::InvalidBoardState`] with the given reason.
    pub fn invalid_board(reason: impl Into<String>) -> Self {
        GameError::InvalidBoardState {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidBoardState { .. } => "INVALID_BOARD_STATE",
            GameError::GameAlreadyOver { .. } => "GAME_ALREADY_OVER",
            GameError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            GameError::CellOccupied { .. } => "CELL_OCCUPIED",
            GameError::WrongTurn { .. } => "WRONG_TURN",
        }
    }
}

impl std::error::Error for GameError {}
