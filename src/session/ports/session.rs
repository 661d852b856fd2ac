//! Session port and its failure modes.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::command::ports::CommandDispatcher;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A source of inbound chat messages.
#[async_trait]
pub trait BotSession: Send + Sync {
    /// Feeds inbound messages to `dispatcher` until `cancel` fires or the
    /// source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session cannot be established or
    /// its transport fails.
    async fn listen(
        &self,
        dispatcher: Arc<dyn CommandDispatcher>,
        cancel: CancellationToken,
    ) -> SessionResult<()>;
}

/// Fatal session failures.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The messaging surface could not be reached.
    #[error("failed to connect session: {0}")]
    Connect(Arc<dyn std::error::Error + Send + Sync>),

    /// Reading input or writing output failed.
    #[error("session I/O failed: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    /// Wraps a connection failure.
    pub fn connect(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Connect(Arc::new(err))
    }

    /// Wraps a transport I/O failure.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
