//! Resolved bot settings.

use std::fmt;

use super::{ConfigError, ConfigResult, EnvFile, ReadEnv};

const DB_HOST: &str = "DB_HOST";
const DB_PORT: &str = "DB_PORT";
const DB_USER: &str = "DB_USER";
const DB_PASSWORD: &str = "DB_PASSWORD";
const DB_NAME: &str = "DB_NAME";
const SLACK_BOT_TOKEN: &str = "SLACK_BOT_TOKEN";
const SLACK_APP_TOKEN: &str = "SLACK_APP_TOKEN";
const BOT_SESSION: &str = "BOT_SESSION";
const COMMAND_EVENT_BUFFER: &str = "COMMAND_EVENT_BUFFER";
const REPORT_MISSING_GAMES: &str = "REPORT_MISSING_GAMES";

const DEFAULT_TOKEN: &str = "yourtoken";
const DEFAULT_EVENT_BUFFER: usize = 100;

const REDACTED: &str = "<redacted>";

/// Relational store connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Server host name.
    pub host: String,
    /// Server port, kept as text as supplied.
    pub port: String,
    /// Login role.
    pub user: String,
    /// Login password, possibly empty.
    pub password: String,
    /// Database name.
    pub name: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: "5432".to_owned(),
            user: "postgres".to_owned(),
            password: String::new(),
            name: "my_database".to_owned(),
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("name", &self.name)
            .finish()
    }
}

/// Slack credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SlackSettings {
    /// Bot token (`xoxb-...`) used to post replies.
    pub bot_token: String,
    /// App-level token (`xapp-...`) used to open the Socket Mode connection.
    pub app_token: String,
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            bot_token: DEFAULT_TOKEN.to_owned(),
            app_token: DEFAULT_TOKEN.to_owned(),
        }
    }
}

impl fmt::Debug for SlackSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackSettings")
            .field("bot_token", &REDACTED)
            .field("app_token", &REDACTED)
            .finish()
    }
}

/// Where inbound commands come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Slack Socket Mode (default).
    #[default]
    Slack,
    /// Lines read from standard input, replies written to standard output.
    Console,
}

impl SessionMode {
    fn parse(raw: &str) -> ConfigResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "slack" => Ok(Self::Slack),
            "console" => Ok(Self::Console),
            _ => Err(ConfigError::InvalidValue {
                key: BOT_SESSION,
                value: raw.to_owned(),
                reason: "expected 'slack' or 'console'".to_owned(),
            }),
        }
    }
}

/// Immutable settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Relational store connection settings.
    pub database: DatabaseSettings,
    /// Slack credentials.
    pub slack: SlackSettings,
    /// Inbound command source.
    pub session: SessionMode,
    /// Capacity of the command event buffer feeding the observer.
    pub command_event_buffer: usize,
    /// Whether disabling an unknown game is reported as an error rather than
    /// a success.
    pub report_missing_games: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            slack: SlackSettings::default(),
            session: SessionMode::default(),
            command_event_buffer: DEFAULT_EVENT_BUFFER,
            report_missing_games: true,
        }
    }
}

impl Settings {
    /// Loads the environment file selected by `env` and resolves settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] when the environment file cannot be
    /// loaded.
    pub fn load(env: &impl ReadEnv) -> ConfigResult<Self> {
        let file = EnvFile::discover(env)?;
        Ok(Self::resolve(env, &file))
    }

    /// Resolves settings from `env`, falling back to `file`, then defaults.
    ///
    /// Values that cannot be interpreted are logged at `warn` and replaced by
    /// their default; only the environment file can fail startup.
    #[must_use]
    pub fn resolve(env: &impl ReadEnv, file: &impl ReadEnv) -> Self {
        let lookup = |key: &str| env.var(key).or_else(|| file.var(key));
        let defaults = Self::default();

        let database = DatabaseSettings {
            host: lookup(DB_HOST).unwrap_or(defaults.database.host),
            port: lookup(DB_PORT).unwrap_or(defaults.database.port),
            user: lookup(DB_USER).unwrap_or(defaults.database.user),
            password: lookup(DB_PASSWORD).unwrap_or(defaults.database.password),
            name: lookup(DB_NAME).unwrap_or(defaults.database.name),
        };
        let slack = SlackSettings {
            bot_token: lookup(SLACK_BOT_TOKEN).unwrap_or(defaults.slack.bot_token),
            app_token: lookup(SLACK_APP_TOKEN).unwrap_or(defaults.slack.app_token),
        };
        let session = or_default(
            lookup(BOT_SESSION).map(|raw| SessionMode::parse(&raw)),
            defaults.session,
        );
        let command_event_buffer = or_default(
            lookup(COMMAND_EVENT_BUFFER).map(|raw| parse_buffer(&raw)),
            defaults.command_event_buffer,
        );
        let report_missing_games = or_default(
            lookup(REPORT_MISSING_GAMES).map(|raw| parse_flag(REPORT_MISSING_GAMES, &raw)),
            defaults.report_missing_games,
        );

        Self {
            database,
            slack,
            session,
            command_event_buffer,
            report_missing_games,
        }
    }
}

fn or_default<T>(parsed: Option<ConfigResult<T>>, default: T) -> T
where
    T: fmt::Debug,
{
    match parsed {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            tracing::warn!(error = %err, ?default, "ignoring invalid setting");
            default
        }
        None => default,
    }
}

fn parse_buffer(raw: &str) -> ConfigResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        Ok(_) => Err(ConfigError::InvalidValue {
            key: COMMAND_EVENT_BUFFER,
            value: raw.to_owned(),
            reason: "capacity must be greater than zero".to_owned(),
        }),
        Err(err) => Err(ConfigError::InvalidValue {
            key: COMMAND_EVENT_BUFFER,
            value: raw.to_owned(),
            reason: err.to_string(),
        }),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_owned(),
            reason: "expected true or false".to_owned(),
        }),
    }
}
