//! Core domain types for tic-tac-toe.

use crate::position::{Position, SIZE};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A side in the game; also the mark that side places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Side {
    /// Side X (always moves first on an empty board).
    X,
    /// Side O.
    O,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// The status reached when this side completes a line.
    pub fn won(self) -> GameStatus {
        match self {
            Side::X => GameStatus::XWon,
            Side::O => GameStatus::OWon,
        }
    }
}

/// A single slot on the board.
///
/// Serialized as its one-character symbol: `" "`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the given side's mark.
    Occupied(Side),
}

impl Cell {
    /// The one-character symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Side::X) => 'X',
            Cell::Occupied(Side::O) => 'O',
        }
    }

    /// Parses a symbol. Only `' '`, `'X'` and `'O'` are accepted.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Cell::Empty),
            'X' => Some(Cell::Occupied(Side::X)),
            'O' => Some(Cell::Occupied(Side::O)),
            _ => None,
        }
    }

    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Occupied(side)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.symbol().to_string()
    }
}

impl TryFrom<String> for Cell {
    type Error = ParseBoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Cell::from_symbol(c).ok_or_else(|| {
                ParseBoardError::new(format!("invalid cell symbol {value:?}"))
            }),
            _ => Err(ParseBoardError::new(format!(
                "cell must be a single character, got {value:?}"
            ))),
        }
    }
}

/// Error returned when a textual board cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invalid board: {message}")]
pub struct ParseBoardError {
    message: String,
}

impl ParseBoardError {
    /// Creates a parse error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable reason.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for ParseBoardError {}

/// 3×3 tic-tac-toe board.
///
/// Cells can only be written from inside the crate; outside code goes
/// through [`crate::Game::apply_move`], which only ever fills an empty
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from rows of cells.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Writes a cell. Callers are responsible for the empty-cell check.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of cells holding `side`'s mark.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.count(Side::X) + self.count(Side::O)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as `XO /   /  X` (rows separated by `/`).
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses the compact form: three rows of three symbols separated by `/`.
///
/// `X`/`x` and `O`/`o` are marks; space, `.`, `_` and `-` are empty.
impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(name = "Board::from_str")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != SIZE {
            return Err(ParseBoardError::new(format!(
                "expected {SIZE} rows separated by '/', got {}",
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != SIZE {
                return Err(ParseBoardError::new(format!(
                    "row {r} must have {SIZE} cells, got {:?}",
                    row
                )));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                cells[r][c] = match symbol {
                    'X' | 'x' => Cell::Occupied(Side::X),
                    'O' | 'o' => Cell::Occupied(Side::O),
                    ' ' | '.' | '_' | '-' => Cell::Empty,
                    other => {
                        return Err(ParseBoardError::new(format!(
                            "invalid symbol {other:?} at row {r}, column {c}"
                        )));
                    }
                };
            }
        }
        Ok(Self { cells })
    }
}

/// Current status of a game.
///
/// `InProgress` is the only non-terminal status; the other three are
/// absorbing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[serde(rename = "IN_PROGRESS")]
    #[strum(serialize = "IN_PROGRESS")]
    InProgress,
    /// X completed a line.
    #[serde(rename = "X_WON")]
    #[strum(serialize = "X_WON")]
    XWon,
    /// O completed a line.
    #[serde(rename = "O_WON")]
    #[strum(serialize = "O_WON")]
    OWon,
    /// Board full, no line completed.
    #[serde(rename = "DRAW")]
    #[strum(serialize = "DRAW")]
    Draw,
}

impl GameStatus {
    /// True for `XWon`, `OWon` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::XWon => Some(Side::X),
            GameStatus::OWon => Some(Side::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
