//! libpq connection strings.

use std::fmt;

use crate::config::DatabaseSettings;

/// A libpq keyword/value connection string.
///
/// Values are single-quoted so empty or spaced values (an empty password in
/// particular) cannot swallow the following keyword.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionString(String);

impl ConnectionString {
    /// Builds `host=.. port=.. user=.. password=.. dbname=.. sslmode=disable`.
    #[must_use]
    pub fn from_settings(settings: &DatabaseSettings) -> Self {
        let pairs = [
            ("host", settings.host.as_str()),
            ("port", settings.port.as_str()),
            ("user", settings.user.as_str()),
            ("password", settings.password.as_str()),
            ("dbname", settings.name.as_str()),
            ("sslmode", "disable"),
        ];
        let rendered = pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", quote(value)))
            .collect::<Vec<_>>()
            .join(" ");
        Self(rendered)
    }

    /// Wraps a ready-made connection string or `postgres://` URL.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string passed to the driver.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConnectionString(<redacted>)")
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for character in value.chars() {
        if matches!(character, '\'' | '\\') {
            quoted.push('\\');
        }
        quoted.push(character);
    }
    quoted.push('\'');
    quoted
}
