//! Startup configuration for the bot.
//!
//! Settings are resolved once from the process environment, an optional
//! environment file, and built-in defaults, then handed to each component as
//! an immutable [`Settings`] value.

mod env;
mod env_file;
mod error;
mod settings;

pub use env::{ReadEnv, SystemEnv};
pub use env_file::{ENV_FILE_VAR, EnvFile};
pub use error::{ConfigError, ConfigResult};
pub use settings::{DatabaseSettings, SessionMode, Settings, SlackSettings};

#[cfg(test)]
mod tests;
