//! Session adapters.

pub mod console;
pub mod slack;

pub use console::{ConsoleResponseWriter, ConsoleSession, ThreadedLineReader};
pub use slack::{SlackResponseWriter, SlackSession};
