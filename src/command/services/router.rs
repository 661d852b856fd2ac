//! Command registration and dispatch.

use async_trait::async_trait;
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;

use crate::command::domain::{
    CommandContext, CommandEvent, CommandPattern, CommandPatternError, CommandRequest,
};
use crate::command::ports::{
    CommandDefinition, CommandDispatcher, DispatchOutcome, ResponseWriter,
};
use crate::observer::CommandEventPublisher;

/// Help-facing description of a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSummary {
    /// Pattern text.
    pub pattern: String,
    /// Optional description.
    pub description: Option<String>,
    /// Usage examples.
    pub examples: Vec<String>,
}

#[derive(Debug, Clone)]
struct RegisteredCommand {
    pattern: CommandPattern,
    definition: CommandDefinition,
}

/// Maps command patterns to handlers and runs the first match.
///
/// Patterns are tried in registration order. Re-registering a pattern with
/// the same literal/placeholder shape replaces the earlier definition in
/// place.
#[derive(Debug, Clone)]
pub struct CommandRouter<C>
where
    C: Clock,
{
    commands: Vec<RegisteredCommand>,
    events: CommandEventPublisher,
    clock: Arc<C>,
}

impl<C> CommandRouter<C>
where
    C: Clock,
{
    /// Creates an empty router publishing events to `events`.
    #[must_use]
    pub const fn new(events: CommandEventPublisher, clock: Arc<C>) -> Self {
        Self {
            commands: Vec::new(),
            events,
            clock,
        }
    }

    /// Registers `definition` under `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandPatternError`] when `pattern` cannot be parsed.
    pub fn register(
        &mut self,
        pattern: &str,
        definition: CommandDefinition,
    ) -> Result<(), CommandPatternError> {
        let parsed = CommandPattern::parse(pattern)?;
        let signature = parsed.signature();
        let entry = RegisteredCommand {
            pattern: parsed,
            definition,
        };

        if let Some(existing) = self
            .commands
            .iter_mut()
            .find(|command| command.pattern.signature() == signature)
        {
            tracing::warn!(
                pattern = %entry.pattern,
                replaced = %existing.pattern,
                "command pattern registered twice, keeping the latest"
            );
            *existing = entry;
        } else {
            tracing::debug!(pattern = %entry.pattern, "registered command");
            self.commands.push(entry);
        }
        Ok(())
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Describes registered commands in registration order.
    #[must_use]
    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.commands
            .iter()
            .map(|command| CommandSummary {
                pattern: command.pattern.to_string(),
                description: command.definition.description().map(ToOwned::to_owned),
                examples: command.definition.examples().to_vec(),
            })
            .collect()
    }

    /// Finds the first command matching `text` and binds its parameters.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<(CommandRequest, &CommandDefinition)> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return None;
        }
        self.commands.iter().find_map(|command| {
            command.pattern.match_words(&words).map(|parameters| {
                (
                    CommandRequest::new(command.pattern.as_str(), parameters),
                    &command.definition,
                )
            })
        })
    }

    /// Runs the handler matching `text`.
    ///
    /// The command event is published before the handler runs. Unmatched
    /// text is ignored without a reply.
    pub async fn route(
        &self,
        context: &CommandContext,
        text: &str,
        response: &dyn ResponseWriter,
    ) -> DispatchOutcome {
        let Some((request, definition)) = self.resolve(text) else {
            tracing::trace!(text, "no command matched");
            return DispatchOutcome::Ignored;
        };

        self.events
            .publish(CommandEvent::for_request(&request, self.clock.as_ref()));

        tracing::debug!(
            command = request.command(),
            channel = context.channel_id(),
            user = context.user_id(),
            "dispatching command"
        );
        if let Err(error) = definition
            .handler()
            .handle(context, &request, response)
            .await
        {
            tracing::warn!(command = request.command(), %error, "command outcome was not delivered");
        }

        DispatchOutcome::Handled {
            command: request.command().to_owned(),
        }
    }
}

#[async_trait]
impl<C> CommandDispatcher for CommandRouter<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn dispatch(
        &self,
        context: &CommandContext,
        text: &str,
        response: &dyn ResponseWriter,
    ) -> DispatchOutcome {
        self.route(context, text, response).await
    }
}
