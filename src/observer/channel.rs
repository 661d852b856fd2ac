//! Bounded command event channel.
//!
//! Publishing never waits: when the buffer is full the newest event is
//! dropped and counted.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::command::domain::CommandEvent;

/// Creates a channel buffering at most `capacity` undelivered events.
///
/// A `capacity` of zero is raised to one.
#[must_use]
pub fn command_event_channel(capacity: usize) -> (CommandEventPublisher, CommandEventStream) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    let publisher = CommandEventPublisher {
        sender,
        dropped: Arc::new(AtomicU64::new(0)),
    };
    (publisher, CommandEventStream { receiver })
}

/// Producer half, shared by every dispatch.
#[derive(Debug, Clone)]
pub struct CommandEventPublisher {
    sender: mpsc::Sender<CommandEvent>,
    dropped: Arc<AtomicU64>,
}

impl CommandEventPublisher {
    /// Queues `event` for the observer without waiting.
    ///
    /// Returns `true` when the event was queued.
    pub fn publish(&self, event: CommandEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(
                    event_id = %event.id,
                    command = %event.command,
                    dropped,
                    "command event buffer full, dropping event"
                );
                false
            }
            Err(TrySendError::Closed(event)) => {
                tracing::debug!(event_id = %event.id, "command event observer stopped");
                false
            }
        }
    }

    /// Number of events dropped because the buffer was full.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Consumer half, read by the single observer task.
#[derive(Debug)]
pub struct CommandEventStream {
    receiver: mpsc::Receiver<CommandEvent>,
}

impl CommandEventStream {
    /// Waits for the next event; `None` once every publisher is dropped and
    /// the buffer is drained.
    pub async fn recv(&mut self) -> Option<CommandEvent> {
        self.receiver.recv().await
    }
}
