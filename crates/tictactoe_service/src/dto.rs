//! Wire-level request and response types, and their mapping to engine types.
//!
//! Boards travel as a 3×3 array of one-character strings (`" "`, `"X"`,
//! `"O"`), sides as `"X"` or `"O"`, statuses as `IN_PROGRESS`, `X_WON`,
//! `O_WON` or `DRAW`.

use crate::ServiceError;
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Cell, Game, Side};
use tracing::{instrument, warn};

/// Board as it appears on the wire.
pub type GameFieldDto = Vec<Vec<String>>;

/// Request to create a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Side chosen by the creating player (`"X"` or `"O"`).
    pub player_side: String,
    /// Optional starting board, e.g. with the player's first move on it.
    #[serde(default)]
    pub game_field: Option<GameFieldDto>,
}

/// Request to place a mark.
///
/// Coordinates are unsigned on the wire. A negative `row` or `col` fails
/// to parse and is reported as `INVALID_REQUEST`; a non-negative value
/// off the board reaches the engine and is reported as `OUT_OF_BOUNDS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
pub struct MoveRequest {
    /// Row, 0 = top.
    pub row: usize,
    /// Column, 0 = left.
    pub col: usize,
    /// Side making the move (`"X"` or `"O"`).
    pub side: String,
}

/// State of a game after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveResultDto {
    /// Identifier of the game.
    pub game_id: String,
    /// `IN_PROGRESS`, `X_WON`, `O_WON` or `DRAW`.
    pub status: String,
    /// Side to move next (frozen once the game is over).
    pub turn: String,
    /// Side of the creating player.
    pub player_side: String,
    /// Current board.
    pub game_field: GameFieldDto,
}

impl From<&Game> for MoveResultDto {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id().to_string(),
            status: game.status().to_string(),
            turn: game.turn().to_string(),
            player_side: game.player_side().to_string(),
            game_field: field_from_board(game.board()),
        }
    }
}

/// Error body returned for a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        Self::new(err.code().to_string(), err.to_string())
    }
}

/// Parses a side; only `"X"` and `"O"` are accepted.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidRequest`] for anything else.
#[instrument]
pub fn parse_side(side: &str) -> Result<Side, ServiceError> {
    match side {
        "X" => Ok(Side::X),
        "O" => Ok(Side::O),
        other => {
            warn!(side = other, "Invalid side");
            Err(ServiceError::InvalidRequest(format!(
                "Invalid player side {other:?}, it should be 'X' or 'O'"
            )))
        }
    }
}

/// Maps a wire board to an engine board.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidRequest`] unless the field is a 3×3
/// matrix of `" "`, `"X"` or `"O"`.
#[instrument(skip(field))]
pub fn board_from_field(field: &[Vec<String>]) -> Result<Board, ServiceError> {
    let invalid = || {
        warn!(?field, "Invalid game field");
        ServiceError::InvalidRequest(
            "Invalid game field, it should be a 3x3 matrix of X or O or empty cells".to_string(),
        )
    };

    if field.len() != 3 {
        return Err(invalid());
    }

    let mut cells = [[Cell::Empty; 3]; 3];
    for (r, row) in field.iter().enumerate() {
        if row.len() != 3 {
            return Err(invalid());
        }
        for (c, symbol) in row.iter().enumerate() {
            cells[r][c] = Cell::try_from(symbol.clone()).map_err(|_| invalid())?;
        }
    }
    Ok(Board::from_rows(cells))
}

/// Maps an engine board to its wire form.
pub fn field_from_board(board: &Board) -> GameFieldDto {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| String::from(*cell)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(rows: [&str; 3]) -> GameFieldDto {
        rows.iter()
            .map(|r| r.chars().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("X").unwrap(), Side::X);
        assert_eq!(parse_side("O").unwrap(), Side::O);
        assert!(matches!(parse_side("x"), Err(ServiceError::InvalidRequest(_))));
        assert!(matches!(parse_side(""), Err(ServiceError::InvalidRequest(_))));
        assert!(matches!(parse_side("XO"), Err(ServiceError::InvalidRequest(_))));
    }

    #[test]
    fn test_board_roundtrip() {
        let f = field(["X  ", " O ", "  X"]);
        let board = board_from_field(&f).unwrap();
        assert_eq!(board.to_compact(), "X  / O /  X");
        assert_eq!(field_from_board(&board), f);
    }

    #[test]
    fn test_rejects_bad_symbol() {
        let f = field(["X  ", " Z ", "   "]);
        assert!(matches!(board_from_field(&f), Err(ServiceError::InvalidRequest(_))));
    }

    #[test]
    fn test_rejects_bad_shape() {
        let short = vec![vec![" ".to_string(); 3]; 2];
        assert!(board_from_field(&short).is_err());
        let ragged = vec![
            vec![" ".to_string(); 3],
            vec![" ".to_string(); 2],
            vec![" ".to_string(); 3],
        ];
        assert!(board_from_field(&ragged).is_err());
    }

    #[test]
    fn test_move_request_rejects_negative_coordinates() {
        assert!(serde_json::from_str::<MoveRequest>(r#"{"row":-1,"col":0,"side":"X"}"#).is_err());
        let off_board: MoveRequest =
            serde_json::from_str(r#"{"row":3,"col":0,"side":"X"}"#).unwrap();
        assert_eq!(off_board.row, 3);
    }

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateGameRequest = serde_json::from_str(
            r#"{"playerSide":"X","gameField":[["X"," "," "],[" "," "," "],[" "," "," "]]}"#,
        )
        .unwrap();
        assert_eq!(req.player_side, "X");
        assert_eq!(req.game_field.map(|f| f.len()), Some(3));

        let bare: CreateGameRequest = serde_json::from_str(r#"{"playerSide":"O"}"#).unwrap();
        assert_eq!(bare.game_field, None);
    }

    #[test]
    fn test_move_result_from_game() {
        let mut game = Game::create(None, Side::X).unwrap();
        game.apply_move(0, 0, Side::X).unwrap();
        let dto = MoveResultDto::from(&game);
        assert_eq!(dto.status, "IN_PROGRESS");
        assert_eq!(dto.turn, "O");
        assert_eq!(dto.game_field[0][0], "X");
        assert_eq!(dto.game_field[2][2], " ");

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("gameField").is_some());
        assert!(json.get("gameId").is_some());
    }
}
