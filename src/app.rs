//! Wires the built-in commands into a router.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::CommandPatternError;
use crate::command::ports::CommandDefinition;
use crate::command::services::{
    CommandRouter, HELP_PATTERN, HelpHandler, HelpTemplateError, PING_PATTERN, PingHandler,
};
use crate::game::ports::GameRepository;
use crate::game::services::{DISABLE_GAME_PATTERN, DisableGameHandler, MissingGamePolicy};
use crate::observer::CommandEventPublisher;

/// Failures while assembling the command table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// A built-in pattern failed to parse.
    #[error(transparent)]
    Pattern(#[from] CommandPatternError),

    /// The help listing could not be rendered.
    #[error(transparent)]
    Help(#[from] HelpTemplateError),
}

/// Builds the router answering `ping`, `disable game {game}` and `help`.
///
/// `help` is registered last so its listing covers every other command.
///
/// # Errors
///
/// Returns [`AppError`] when a built-in command cannot be registered.
pub fn build_router<R, C>(
    repository: Arc<R>,
    policy: MissingGamePolicy,
    events: CommandEventPublisher,
    clock: Arc<C>,
) -> Result<CommandRouter<C>, AppError>
where
    R: GameRepository + 'static,
    C: Clock,
{
    let mut router = CommandRouter::new(events, clock);
    router.register(PING_PATTERN, CommandDefinition::new(Arc::new(PingHandler)))?;
    router.register(
        DISABLE_GAME_PATTERN,
        CommandDefinition::new(Arc::new(DisableGameHandler::new(repository, policy)))
            .with_description("Disable the game given!")
            .with_example("disable game ABC"),
    )?;

    let help = HelpHandler::new(router.summaries())?;
    router.register(
        HELP_PATTERN,
        CommandDefinition::new(Arc::new(help)).with_description(HelpHandler::description()),
    )?;

    tracing::debug!(commands = router.len(), "command router built");
    Ok(router)
}
