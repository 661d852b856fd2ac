//! Built-in liveness check.

use async_trait::async_trait;

use crate::command::domain::{CommandContext, CommandRequest};
use crate::command::ports::{CommandHandler, ResponseResult, ResponseWriter};

/// Pattern under which the liveness check is registered.
pub const PING_PATTERN: &str = "ping";

/// Replies `pong`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PingHandler;

#[async_trait]
impl CommandHandler for PingHandler {
    async fn handle(
        &self,
        _context: &CommandContext,
        _request: &CommandRequest,
        response: &dyn ResponseWriter,
    ) -> ResponseResult<()> {
        response.reply("pong").await
    }
}
