//! Command domain model.
//!
//! Patterns, matched requests, and the events recorded for each dispatch.
//! Nothing here performs I/O.

mod error;
mod event;
mod pattern;
mod request;

pub use error::CommandPatternError;
pub use event::CommandEvent;
pub use pattern::{CommandPattern, PatternToken};
pub use request::{CommandContext, CommandRequest};
