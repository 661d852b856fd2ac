//! Repository port for game mutations.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::game::domain::DisableGameOutcome;

/// Result type for game repository operations.
pub type GameRepositoryResult<T> = Result<T, GameRepositoryError>;

/// Game persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Marks the game called `name` as disabled.
    ///
    /// Runs exactly once; an unknown name yields zero affected rows rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameRepositoryError`] when the store cannot be reached, the
    /// statement fails, or the affected-row count cannot be read.
    async fn disable_game(&self, name: &str) -> GameRepositoryResult<DisableGameOutcome>;
}

/// Errors returned by game repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GameRepositoryError {
    /// The store could not be reached or rejected the credentials.
    #[error("failed to open connection: {0}")]
    Connection(Arc<dyn std::error::Error + Send + Sync>),

    /// The statement itself failed.
    #[error("failed to execute: {0}")]
    Execution(Arc<dyn std::error::Error + Send + Sync>),

    /// The statement ran but its affected-row count is unusable.
    #[error("failed to get affected rows: {0}")]
    ResultInspection(Arc<dyn std::error::Error + Send + Sync>),
}

impl GameRepositoryError {
    /// Wraps a connection failure.
    pub fn connection(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Connection(Arc::new(err))
    }

    /// Wraps a statement failure.
    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Execution(Arc::new(err))
    }

    /// Wraps an affected-row inspection failure.
    pub fn result_inspection(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ResultInspection(Arc::new(err))
    }
}
