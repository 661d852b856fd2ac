//! Command routing services and built-in commands.

mod help;
mod ping;
mod router;

pub use help::{HELP_PATTERN, HelpHandler, HelpTemplateError};
pub use ping::{PING_PATTERN, PingHandler};
pub use router::{CommandRouter, CommandSummary};
