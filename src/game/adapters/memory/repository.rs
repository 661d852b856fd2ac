//! In-memory game repository for tests and console runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::game::{
    domain::DisableGameOutcome,
    ports::{GameRepository, GameRepositoryError, GameRepositoryResult},
};

/// Thread-safe map of game name to `disabled` flag.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, bool>>>,
}

impl InMemoryGameRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `names`, all enabled.
    #[must_use]
    pub fn with_games(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let games = names.into_iter().map(|name| (name.into(), false)).collect();
        Self {
            games: Arc::new(RwLock::new(games)),
        }
    }

    /// Returns the `disabled` flag of `name`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`GameRepositoryError::Execution`] when the lock is poisoned.
    pub fn is_disabled(&self, name: &str) -> GameRepositoryResult<Option<bool>> {
        let games = self.games.read().map_err(|err| {
            GameRepositoryError::execution(std::io::Error::other(err.to_string()))
        })?;
        Ok(games.get(name).copied())
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn disable_game(&self, name: &str) -> GameRepositoryResult<DisableGameOutcome> {
        let mut games = self.games.write().map_err(|err| {
            GameRepositoryError::execution(std::io::Error::other(err.to_string()))
        })?;

        let rows_affected = match games.get_mut(name) {
            Some(disabled) => {
                *disabled = true;
                1
            }
            None => 0,
        };
        Ok(DisableGameOutcome::new(rows_affected))
    }
}
