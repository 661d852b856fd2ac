//! Command handler port and the definition registered with the router.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use super::{ResponseResult, ResponseWriter};
use crate::command::domain::{CommandContext, CommandRequest};

/// Runs one matched command.
///
/// A handler should send at most one of [`ResponseWriter::reply`] or
/// [`ResponseWriter::report_error`].
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles `request`, answering through `response`.
    ///
    /// # Errors
    ///
    /// Returns the delivery failure when the outcome could not be sent back.
    async fn handle(
        &self,
        context: &CommandContext,
        request: &CommandRequest,
        response: &dyn ResponseWriter,
    ) -> ResponseResult<()>;
}

/// Everything registered for one command besides its pattern.
#[derive(Clone)]
pub struct CommandDefinition {
    description: Option<String>,
    examples: Vec<String>,
    handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    /// Creates a definition around `handler`.
    #[must_use]
    pub fn new(handler: Arc<dyn CommandHandler>) -> Self {
        Self {
            description: None,
            examples: Vec::new(),
            handler,
        }
    }

    /// Sets the help description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a usage example.
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Returns the help description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns usage examples in registration order.
    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("description", &self.description)
            .field("examples", &self.examples)
            .finish_non_exhaustive()
    }
}
