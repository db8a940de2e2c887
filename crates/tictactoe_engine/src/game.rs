//! Game state machine for tic-tac-toe.
//!
//! A [`Game`] is created once and then mutated only through
//! [`Game::apply_move`]. Status is never set directly: it is recomputed
//! from the board after every accepted move, and once it is terminal the
//! game rejects all further moves.

use crate::rules::{compute_status, validate_initial_board};
use crate::{Board, Cell, GameError, GameStatus, Position, Side};
use derive_more::{Display, From};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Opaque game identifier, assigned at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh random identifier (128 bits, hex-encoded).
    pub fn generate() -> Self {
        let bits: u128 = rand::thread_rng().r#gen();
        Self(format!("{bits:032x}"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An accepted move: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that moved.
    pub side: Side,
    /// Where the mark was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position)
    }
}

/// A single tic-tac-toe game.
///
/// Deserialization re-derives the status from the board and rejects
/// records whose board, turn or history could not come from play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    id: GameId,
    board: Board,
    player_side: Side,
    turn: Side,
    status: GameStatus,
    history: Vec<Move>,
}

/// Unchecked wire form of a [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    id: GameId,
    board: Board,
    player_side: Side,
    turn: Side,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    #[instrument(skip(record), fields(id = %record.id))]
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let next = validate_initial_board(&record.board)?;

        let status = compute_status(&record.board);
        if status != record.status {
            warn!(claimed = %record.status, actual = %status, "Stored status does not match board");
            return Err(GameError::invalid_board(format!(
                "status {} does not match board, which is {status}",
                record.status
            )));
        }

        // Equal counts leave either side to move, depending on who opened.
        let (x_count, o_count) = (record.board.count(Side::X), record.board.count(Side::O));
        if !status.is_terminal() && x_count != o_count && record.turn != next {
            warn!(turn = %record.turn, expected = %next, "Stored turn does not match board");
            return Err(GameError::invalid_board(format!(
                "{} cannot be to move on this board",
                record.turn
            )));
        }

        if let Some(mv) = record
            .history
            .iter()
            .find(|mv| record.board.get(mv.position) != Cell::Occupied(mv.side))
        {
            warn!(%mv, "History disagrees with board");
            return Err(GameError::invalid_board(format!(
                "history move {mv} is not on the board"
            )));
        }

        debug!(%status, moves = record.history.len(), "Game restored");
        Ok(Self {
            id: record.id,
            board: record.board,
            player_side: record.player_side,
            turn: record.turn,
            status,
            history: record.history,
        })
    }
}

impl Game {
    /// Creates a game with a freshly generated identifier.
    ///
    /// See [`Game::create_with_id`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardState`] if `initial` cannot arise
    /// from alternating play.
    #[instrument(skip(initial))]
    pub fn create(initial: Option<Board>, player_side: Side) -> Result<Self, GameError> {
        Self::create_with_id(GameId::generate(), initial, player_side)
    }

    /// Creates a game with the given identifier.
    ///
    /// Without an initial board the game starts empty with X to move.
    /// With one, the side with fewer marks moves next (X on equal counts)
    /// and the status is computed from the board, so a board that is
    /// already decided yields a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardState`] if `initial` cannot arise
    /// from alternating play.
    #[instrument(skip(id, initial), fields(id = %id))]
    pub fn create_with_id(
        id: GameId,
        initial: Option<Board>,
        player_side: Side,
    ) -> Result<Self, GameError> {
        let board = initial.unwrap_or_default();
        let turn = validate_initial_board(&board)?;
        let status = compute_status(&board);

        info!(
            %player_side,
            %turn,
            %status,
            marks = board.occupied(),
            "Game created"
        );

        Ok(Self {
            id,
            board,
            player_side,
            turn,
            status,
            history: Vec::new(),
        })
    }

    /// Places `side`'s mark at `(row, col)` and returns the new status.
    ///
    /// Checks run in a fixed order: game over, bounds, occupancy, turn.
    /// The turn indicator only toggles while the game stays in progress,
    /// so a finished game keeps the turn of the side that ended it.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] if the status is terminal.
    /// - [`GameError::OutOfBounds`] if `row` or `col` is not in `0..3`.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    /// - [`GameError::WrongTurn`] if `side` is not the side to move.
    ///
    /// On error the game is left untouched.
    #[instrument(skip(self), fields(id = %self.id, turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize, side: Side) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move attempted on finished game");
            return Err(GameError::GameAlreadyOver {
                status: self.status,
            });
        }

        let position = Position::new(row, col).inspect_err(|_| {
            warn!(row, col, "Move out of bounds");
        })?;

        if !self.board.is_empty(position) {
            warn!(%position, "Cell already occupied");
            return Err(GameError::CellOccupied { position });
        }

        if side != self.turn {
            warn!(expected = %self.turn, actual = %side, "Move out of turn");
            return Err(GameError::WrongTurn {
                expected: self.turn,
                actual: side,
            });
        }

        self.board.set(position, Cell::Occupied(side));
        self.history.push(Move { side, position });
        self.status = compute_status(&self.board);

        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.history.len(), "Game finished");
        } else {
            self.turn = side.opponent();
            debug!(next = %self.turn, "Move accepted");
        }

        Ok(self.status)
    }

    /// Returns the game identifier.
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side assigned to the player who created the game.
    pub fn player_side(&self) -> Side {
        self.player_side
    }

    /// Side whose turn it is (frozen once the game is over).
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves accepted since creation, oldest first.
    ///
    /// Marks present on the initial board are not part of the history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the status is terminal.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
