//! Environment variable access.

use std::collections::HashMap;
use std::env;

/// Read-only view of environment variables.
///
/// Production code reads the process environment through [`SystemEnv`];
/// tests substitute a map.
pub trait ReadEnv {
    /// Returns the value of `key`, or `None` when unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<S> ReadEnv for HashMap<String, String, S>
where
    S: std::hash::BuildHasher,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
