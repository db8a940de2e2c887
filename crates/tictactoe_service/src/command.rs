//! Line-oriented JSON command loop.
//!
//! Each input line holds one [`Command`]; each command produces exactly one
//! [`Reply`] line on the output.

use crate::dto::{CreateGameRequest, ErrorResponse, MoveRequest, MoveResultDto};
use crate::service::GameService;
use crate::store::GameStore;
use crate::ServiceError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tictactoe_engine::GameId;
use tracing::{debug, info, instrument, warn};

/// A request read from the command loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    /// Create a game.
    Create(CreateGameRequest),
    /// Place a mark in an existing game.
    Move {
        /// Target game.
        #[serde(rename = "gameId")]
        game_id: String,
        /// The move.
        #[serde(flatten)]
        request: MoveRequest,
    },
    /// Read the state of an existing game.
    Get {
        /// Target game.
        #[serde(rename = "gameId")]
        game_id: String,
    },
}

/// A response written by the command loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    /// The operation succeeded.
    Ok(MoveResultDto),
    /// The operation failed.
    Error(ErrorResponse),
}

impl From<Result<MoveResultDto, ServiceError>> for Reply {
    fn from(result: Result<MoveResultDto, ServiceError>) -> Self {
        match result {
            Ok(dto) => Reply::Ok(dto),
            Err(e) => Reply::Error(ErrorResponse::from(&e)),
        }
    }
}

/// Executes a single command against the service.
#[instrument(skip(service))]
pub fn execute<S: GameStore>(service: &GameService<S>, command: Command) -> Reply {
    let result = match command {
        Command::Create(request) => service.create_game(request),
        Command::Move { game_id, request } => service.make_move(&GameId::from(game_id), request),
        Command::Get { game_id } => service.get_game(&GameId::from(game_id)),
    };
    if let Err(e) = &result {
        warn!(code = e.code(), error = %e, "Command failed");
    }
    Reply::from(result)
}

/// Reads commands from `input` until EOF, writing one reply per command.
///
/// Blank lines are skipped. Lines that are not valid commands produce an
/// `INVALID_REQUEST` reply; the loop keeps going.
///
/// # Errors
///
/// Returns an I/O error if reading `input` or writing `output` fails.
#[instrument(skip_all)]
pub fn run<S, R, W>(service: &GameService<S>, input: R, mut output: W) -> std::io::Result<usize>
where
    S: GameStore,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Command>(&line) {
            Ok(command) => execute(service, command),
            Err(e) => {
                debug!(error = %e, "Unparseable command");
                Reply::Error(ErrorResponse::new(
                    "INVALID_REQUEST".to_string(),
                    format!("Invalid command: {e}"),
                ))
            }
        };

        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        output.flush()?;
        handled += 1;
    }

    info!(handled, "Command loop finished");
    Ok(handled)
}
