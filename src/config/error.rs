//! Configuration loading errors.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while resolving [`super::Settings`].
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The environment file could not be opened, read, or parsed.
    #[error("failed to load environment file '{path}': {source}")]
    EnvFile {
        /// Path of the environment file.
        path: Utf8PathBuf,
        /// Underlying I/O or parse failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// A setting was present but could not be interpreted. Reported as a
    /// warning while the default is used instead.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Environment key.
        key: &'static str,
        /// Raw value as found.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Wraps an environment-file failure.
    pub fn env_file(
        path: impl Into<Utf8PathBuf>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::EnvFile {
            path: path.into(),
            source: Arc::new(err),
        }
    }
}
