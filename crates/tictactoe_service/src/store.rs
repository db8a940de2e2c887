//! Identifier → game storage.

use crate::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tictactoe_engine::{Game, GameId};
use tracing::{debug, info, instrument, warn};

/// Storage mapping game identifiers to games.
///
/// Implementations must run [`GameStore::update`] with exclusive access to
/// the game, so at most one move is applied to a given game at a time.
pub trait GameStore: Send + Sync {
    /// Stores a game under its own identifier, replacing any previous one.
    fn insert(&self, game: Game) -> Result<(), StoreError>;

    /// Returns a copy of the stored game.
    fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError>;

    /// Runs `f` on the stored game while holding exclusive access.
    ///
    /// Returns `Ok(None)` if no game is stored under `id`.
    fn update<R>(&self, id: &GameId, f: impl FnOnce(&mut Game) -> R) -> Result<Option<R>, StoreError>;

    /// Removes and returns the stored game.
    fn remove(&self, id: &GameId) -> Result<Option<Game>, StoreError>;

    /// Lists stored identifiers.
    fn ids(&self) -> Result<Vec<GameId>, StoreError>;
}

/// In-memory game store shared between clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl InMemoryGameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory game store");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<GameId, Game>>, StoreError> {
        self.games
            .lock()
            .map_err(|_| StoreError::new("game store lock poisoned"))
    }
}

impl GameStore for InMemoryGameStore {
    #[instrument(skip(self, game), fields(id = %game.id()))]
    fn insert(&self, game: Game) -> Result<(), StoreError> {
        let mut games = self.lock()?;
        games.insert(game.id().clone(), game);
        debug!(count = games.len(), "Game stored");
        Ok(())
    }

    #[instrument(skip(self))]
    fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        let game = self.lock()?.get(id).cloned();
        if game.is_none() {
            debug!(%id, "Game not found");
        }
        Ok(game)
    }

    #[instrument(skip(self, f))]
    fn update<R>(&self, id: &GameId, f: impl FnOnce(&mut Game) -> R) -> Result<Option<R>, StoreError> {
        let mut games = self.lock()?;
        match games.get_mut(id) {
            Some(game) => Ok(Some(f(game))),
            None => {
                warn!(%id, "Update on unknown game");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    fn remove(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        let removed = self.lock()?.remove(id);
        if removed.is_some() {
            info!(%id, "Game removed");
        }
        Ok(removed)
    }

    #[instrument(skip(self))]
    fn ids(&self) -> Result<Vec<GameId>, StoreError> {
        let mut ids: Vec<GameId> = self.lock()?.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
