//! Command event observation.
//!
//! Every dispatch publishes a [`CommandEvent`](crate::command::domain::CommandEvent)
//! into a bounded channel read by one long-lived task. The channel drops
//! events rather than stall dispatch when the observer falls behind.

mod channel;
mod logger;

pub use channel::{CommandEventPublisher, CommandEventStream, command_event_channel};
pub use logger::{CommandEventObserver, LoggingObserver, run_observer};

#[cfg(test)]
mod tests;
