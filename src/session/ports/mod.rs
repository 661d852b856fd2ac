//! Port contracts for bot sessions.

mod session;

pub use session::{BotSession, SessionError, SessionResult};
