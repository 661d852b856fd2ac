//! Command events published for observability.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::CommandRequest;

/// Record of one dispatched command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// Pattern text of the matched command.
    pub command: String,
    /// Bound placeholder values.
    pub parameters: BTreeMap<String, String>,
    /// Dispatch instant.
    pub timestamp: DateTime<Utc>,
}

impl CommandEvent {
    /// Creates an event for `request`, stamped with the clock's current UTC
    /// time.
    #[must_use]
    pub fn for_request(request: &CommandRequest, clock: &impl Clock) -> Self {
        Self {
            id: Uuid::new_v4(),
            command: request.command().to_owned(),
            parameters: request.parameters().clone(),
            timestamp: clock.utc(),
        }
    }
}
