//! Board coordinates.

use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// A cell coordinate on the 3×3 board.
///
/// Both coordinates are guaranteed to lie in `0..3`; the only public
/// constructor rejects anything else with [`GameError::OutOfBounds`].
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, checking that both coordinates are on the board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `row` or `col` is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Builds a position from coordinates already known to be in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column index (0 = left).
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Row-major index in `0..9`.
    pub fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
