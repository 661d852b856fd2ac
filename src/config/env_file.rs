//! `.env` file loading.
//!
//! The file is parsed into a map and layered beneath the process
//! environment; the process environment itself is never modified.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::collections::HashMap;
use std::io;

use super::{ConfigError, ConfigResult, ReadEnv};

/// Names the environment file to load. When set, the file is mandatory.
pub const ENV_FILE_VAR: &str = "GAMEBOT_ENV_FILE";

const DEFAULT_ENV_FILE: &str = ".env";

/// Key/value pairs read from an environment file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Loads the environment file selected by `env`.
    ///
    /// With [`ENV_FILE_VAR`] set, that path must exist and parse. Without it,
    /// `.env` is read when present and an empty set is returned otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] when a required file is missing or
    /// any file is unreadable or malformed.
    pub fn discover(env: &impl ReadEnv) -> ConfigResult<Self> {
        match env.var(ENV_FILE_VAR) {
            Some(path) => Self::load(Utf8Path::new(&path)),
            None => Self::load_optional(Utf8Path::new(DEFAULT_ENV_FILE)),
        }
    }

    /// Loads a mandatory environment file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] when the file is missing, unreadable,
    /// or malformed.
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let contents = read_file(path).map_err(|err| ConfigError::env_file(path, err))?;
        Self::parse(path, &contents)
    }

    /// Loads an environment file, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] when the file exists but cannot be
    /// read or parsed.
    pub fn load_optional(path: &Utf8Path) -> ConfigResult<Self> {
        match read_file(path) {
            Ok(contents) => Self::parse(path, &contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "no environment file found, using process environment");
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::env_file(path, err)),
        }
    }

    /// Parses environment-file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] naming `path` when a line is malformed.
    pub fn parse(path: &Utf8Path, contents: &str) -> ConfigResult<Self> {
        let values = dotenvy::from_read_iter(contents.as_bytes())
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(|err| ConfigError::env_file(path, err))?;
        tracing::debug!(path = %path, keys = values.len(), "loaded environment file");
        Ok(Self { values })
    }

    /// Number of keys defined by the file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the file defined no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ReadEnv for EnvFile {
    fn var(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, file_name) = split_path(path)?;
    let directory = Dir::open_ambient_dir(dir, ambient_authority())?;
    directory.read_to_string(file_name)
}

fn split_path(path: &Utf8Path) -> io::Result<(Utf8PathBuf, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{path}' does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    Ok((parent, file_name))
}
