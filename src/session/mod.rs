//! Bot sessions: where inbound messages come from and replies go.
//!
//! A session owns the connection to a messaging surface, hands each inbound
//! message to a [`CommandDispatcher`](crate::command::ports::CommandDispatcher)
//! and delivers replies through a conversation-scoped writer.
//!
//! - Port contracts in [`ports`]
//! - Slack Socket Mode and console adapters in [`adapters`]

pub mod adapters;
pub mod ports;

#[cfg(test)]
mod tests;
