//! Inbound command context and matched requests.

use std::collections::BTreeMap;

/// Where an inbound command came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    channel_id: Option<String>,
    user_id: Option<String>,
}

impl CommandContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the originating channel.
    #[must_use]
    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Sets the originating user.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Returns the originating channel, if known.
    #[must_use]
    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    /// Returns the originating user, if known.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

/// A command invocation that matched a registered pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    command: String,
    parameters: BTreeMap<String, String>,
}

impl CommandRequest {
    /// Creates a request for `command` with bound `parameters`.
    #[must_use]
    pub fn new(command: impl Into<String>, parameters: BTreeMap<String, String>) -> Self {
        Self {
            command: command.into(),
            parameters,
        }
    }

    /// Returns the pattern text that matched.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the value bound to placeholder `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Returns all bound placeholder values.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}
