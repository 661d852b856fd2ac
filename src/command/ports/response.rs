//! Reply port scoped to the conversation a command came from.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reply delivery.
pub type ResponseResult<T> = Result<T, ResponseError>;

/// Sends outcomes back to the originating conversation.
#[async_trait]
pub trait ResponseWriter: Send + Sync {
    /// Sends a success message.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError`] when the message cannot be delivered.
    async fn reply(&self, text: &str) -> ResponseResult<()>;

    /// Sends a failure message.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError`] when the message cannot be delivered.
    async fn report_error(&self, message: &str) -> ResponseResult<()>;
}

/// Reply delivery failures.
#[derive(Debug, Clone, Error)]
pub enum ResponseError {
    /// The messaging platform rejected or never received the message.
    #[error("failed to deliver reply: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl ResponseError {
    /// Wraps a transport failure.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
