//! Service error types.

use derive_more::{Display, Error, From};
use tictactoe_engine::{GameError, GameId};
use tracing::instrument;

/// Game store failure with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure of a service operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ServiceError {
    /// The engine rejected the operation.
    #[display("{_0}")]
    #[from]
    Game(GameError),

    /// No game is stored under the identifier.
    #[display("Game {_0} not found")]
    NotFound(GameId),

    /// The request could not be mapped to engine types.
    #[display("Invalid request: {_0}")]
    InvalidRequest(String),

    /// The store failed.
    #[display("{_0}")]
    #[from]
    Store(StoreError),
}

impl ServiceError {
    /// Stable machine-readable code for this error.
    ///
    /// Engine errors keep their own codes so callers can map them
    /// one-to-one.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Game(e) => e.code(),
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::InvalidRequest(_) => "INVALID_REQUEST",
            ServiceError::Store(_) => "STORE_FAILURE",
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Game(e) => Some(e),
            ServiceError::Store(e) => Some(e),
            ServiceError::NotFound(_) | ServiceError::InvalidRequest(_) => None,
        }
    }
}
