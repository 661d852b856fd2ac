//! Event consumer task.

use chrono::SecondsFormat;

use super::CommandEventStream;
use crate::command::domain::CommandEvent;

/// Receives every delivered command event.
pub trait CommandEventObserver: Send {
    /// Records one event.
    fn observe(&mut self, event: &CommandEvent);
}

/// Writes each event to the log.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    observed: u64,
}

impl LoggingObserver {
    /// Creates a logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events logged so far.
    #[must_use]
    pub const fn observed(&self) -> u64 {
        self.observed
    }
}

impl CommandEventObserver for LoggingObserver {
    fn observe(&mut self, event: &CommandEvent) {
        self.observed += 1;
        tracing::info!(
            event_id = %event.id,
            command = %event.command,
            params = %serde_json::to_string(&event.parameters).unwrap_or_default(),
            time = %event.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            "command dispatched"
        );
    }
}

/// Feeds `observer` until the stream closes, then hands it back.
pub async fn run_observer<O>(mut stream: CommandEventStream, mut observer: O) -> O
where
    O: CommandEventObserver,
{
    while let Some(event) = stream.recv().await {
        observer.observe(&event);
    }
    tracing::debug!("command event stream closed");
    observer
}
