//! `disable game {game}` handler.

use async_trait::async_trait;
use std::sync::Arc;

use crate::command::domain::{CommandContext, CommandRequest};
use crate::command::ports::{CommandHandler, ResponseResult, ResponseWriter};
use crate::game::ports::GameRepository;

/// Pattern under which the handler is registered.
pub const DISABLE_GAME_PATTERN: &str = "disable game {game}";

/// Reply sent when the mutation succeeds.
pub const SUCCESS_REPLY: &str = "Successfully updated!";

const GAME_PARAMETER: &str = "game";

/// What to tell the user when no row matched the game name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingGamePolicy {
    /// Report success regardless of the affected-row count.
    ReportSuccess,
    /// Report an error naming the unknown game.
    #[default]
    ReportNotFound,
}

impl MissingGamePolicy {
    /// Maps the `report missing games` setting onto a policy.
    #[must_use]
    pub const fn from_flag(report_missing: bool) -> Self {
        if report_missing {
            Self::ReportNotFound
        } else {
            Self::ReportSuccess
        }
    }
}

/// Disables the named game and reports the outcome.
#[derive(Debug)]
pub struct DisableGameHandler<R>
where
    R: GameRepository,
{
    repository: Arc<R>,
    policy: MissingGamePolicy,
}

impl<R> DisableGameHandler<R>
where
    R: GameRepository,
{
    /// Creates a handler over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>, policy: MissingGamePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R> CommandHandler for DisableGameHandler<R>
where
    R: GameRepository + 'static,
{
    async fn handle(
        &self,
        context: &CommandContext,
        request: &CommandRequest,
        response: &dyn ResponseWriter,
    ) -> ResponseResult<()> {
        let game = request.param(GAME_PARAMETER).unwrap_or_default();

        match self.repository.disable_game(game).await {
            Ok(outcome) if outcome.matched() => {
                tracing::info!(
                    game,
                    rows_affected = outcome.rows_affected(),
                    user = context.user_id(),
                    "game disabled"
                );
                response.reply(SUCCESS_REPLY).await
            }
            Ok(_) => match self.policy {
                MissingGamePolicy::ReportSuccess => {
                    tracing::info!(game, "no game matched, reporting success");
                    response.reply(SUCCESS_REPLY).await
                }
                MissingGamePolicy::ReportNotFound => {
                    tracing::info!(game, "no game matched");
                    response
                        .report_error(&format!("game '{game}' not found"))
                        .await
                }
            },
            Err(error) => {
                tracing::error!(game, %error, "failed to disable game");
                response.report_error(&format!("failed! {game}")).await
            }
        }
    }
}
