//! Game service around the tic-tac-toe engine.
//!
//! Resolves opaque game identifiers through an injected [`GameStore`],
//! maps wire DTOs to engine types, and optionally plays the side the
//! creating player did not choose.
//!
//! # Example
//!
//! ```
//! use tictactoe_service::{CreateGameRequest, GameService, MoveRequest, ServiceConfig};
//! use tictactoe_engine::GameId;
//!
//! # fn main() -> Result<(), tictactoe_service::ServiceError> {
//! let service = GameService::in_memory(ServiceConfig::two_player());
//! let created = service.create_game(CreateGameRequest::new("X".to_string(), None))?;
//!
//! let id = GameId::from(created.game_id.as_str());
//! let after = service.make_move(&id, MoveRequest::new(1, 1, "X".to_string()))?;
//! assert_eq!(after.status, "IN_PROGRESS");
//! assert_eq!(after.turn, "O");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod dto;
mod error;
mod service;
mod store;

pub use command::{Command, Reply, execute, run};
pub use config::{ConfigError, Opening, Opponent, ServiceConfig};
pub use dto::{
    CreateGameRequest, ErrorResponse, GameFieldDto, MoveRequest, MoveResultDto, board_from_field,
    field_from_board, parse_side,
};
pub use error::{ServiceError, StoreError};
pub use service::GameService;
pub use store::{GameStore, InMemoryGameStore};
