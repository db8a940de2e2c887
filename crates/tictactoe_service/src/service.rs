//! Game service: resolves identifiers, maps DTOs and drives the engine.

use crate::config::{Opening, Opponent, ServiceConfig};
use crate::dto::{CreateGameRequest, MoveRequest, MoveResultDto, board_from_field, parse_side};
use crate::store::{GameStore, InMemoryGameStore};
use crate::ServiceError;
use tictactoe_engine::{Game, GameId, best_move, random_move};
use tracing::{debug, info, instrument, warn};

/// Create/move operations over an injected [`GameStore`].
#[derive(Debug, Clone)]
pub struct GameService<S = InMemoryGameStore> {
    store: S,
    config: ServiceConfig,
}

impl GameService<InMemoryGameStore> {
    /// Creates a service over a fresh in-memory store.
    #[instrument(skip(config))]
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(InMemoryGameStore::new(), config)
    }
}

impl<S: GameStore> GameService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S, config: ServiceConfig) -> Self {
        info!(opponent = %config.opponent(), "Creating game service");
        Self { store, config }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Creates a game and, against the computer, plays its opening move
    /// when the computer is the side to move.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidRequest`] for a malformed side or board.
    /// - [`ServiceError::Game`] with `InvalidBoardState` for a board that
    ///   cannot arise from alternating play.
    #[instrument(skip(self, request), fields(player_side = %request.player_side))]
    pub fn create_game(&self, request: CreateGameRequest) -> Result<MoveResultDto, ServiceError> {
        let player_side = parse_side(&request.player_side)?;
        let initial = request
            .game_field
            .as_deref()
            .map(board_from_field)
            .transpose()?;

        let mut game = Game::create(initial, player_side)?;
        self.computer_reply(&mut game)?;

        let result = MoveResultDto::from(&game);
        if game.is_over() && *self.config.evict_finished() {
            debug!(id = %game.id(), "Game finished at creation; not stored");
        } else {
            self.store.insert(game)?;
        }

        info!(id = %result.game_id, status = %result.status, "Game created");
        Ok(result)
    }

    /// Applies a move to the stored game; against the computer the reply
    /// is applied under the same exclusive access.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::NotFound`] if no game is stored under `id`.
    /// - [`ServiceError::InvalidRequest`] for a malformed side.
    /// - [`ServiceError::Game`] when the engine rejects the move; the
    ///   stored game is left unchanged.
    #[instrument(skip(self, request), fields(row = request.row, col = request.col, side = %request.side))]
    pub fn make_move(&self, id: &GameId, request: MoveRequest) -> Result<MoveResultDto, ServiceError> {
        let side = parse_side(&request.side)?;

        let (result, finished) = self
            .store
            .update(id, |game| -> Result<(MoveResultDto, bool), ServiceError> {
                game.apply_move(request.row, request.col, side)?;
                self.computer_reply(game)?;
                Ok((MoveResultDto::from(&*game), game.is_over()))
            })?
            .ok_or_else(|| {
                warn!(%id, "Move on unknown game");
                ServiceError::NotFound(id.clone())
            })??;

        if finished && *self.config.evict_finished() {
            self.store.remove(id)?;
        }

        info!(status = %result.status, "Move applied");
        Ok(result)
    }

    /// Returns the current state of a stored game.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no game is stored under `id`.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &GameId) -> Result<MoveResultDto, ServiceError> {
        self.store
            .get(id)?
            .map(|game| MoveResultDto::from(&game))
            .ok_or_else(|| ServiceError::NotFound(id.clone()))
    }

    /// Plays the computer's move if the computer is the side to move.
    fn computer_reply(&self, game: &mut Game) -> Result<(), ServiceError> {
        if *self.config.opponent() != Opponent::Computer {
            return Ok(());
        }

        let side = game.player_side().opponent();
        if game.is_over() || game.turn() != side {
            return Ok(());
        }

        let board = game.board();
        let choice = if board.occupied() == 0 && *self.config.computer_opening() == Opening::Random {
            random_move(board, &mut rand::thread_rng())
        } else {
            best_move(board, side)
        };

        if let Some(pos) = choice {
            debug!(%pos, %side, "Computer move");
            game.apply_move(pos.row(), pos.col(), side)?;
        }
        Ok(())
    }
}
