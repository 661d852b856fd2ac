//! Dispatch port consumed by bot sessions.

use async_trait::async_trait;

use super::ResponseWriter;
use crate::command::domain::CommandContext;

/// What happened to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No registered pattern matched; nothing ran and nothing was sent.
    Ignored,
    /// The handler for `command` ran.
    Handled {
        /// Pattern text of the matched command.
        command: String,
    },
}

/// Routes inbound text to command handlers.
#[async_trait]
pub trait CommandDispatcher: Send + Sync {
    /// Dispatches `text`, answering through `response` when a command matches.
    async fn dispatch(
        &self,
        context: &CommandContext,
        text: &str,
        response: &dyn ResponseWriter,
    ) -> DispatchOutcome;
}
