//! Error types for command pattern parsing.

use thiserror::Error;

/// Errors raised while parsing a command pattern at registration time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandPatternError {
    /// The pattern has no tokens.
    #[error("command pattern cannot be empty")]
    EmptyPattern,

    /// A `{}` placeholder has no name.
    #[error("placeholder in '{pattern}' has no name")]
    EmptyPlaceholder {
        /// The offending pattern.
        pattern: String,
    },

    /// A token opens or closes a placeholder without the matching brace.
    #[error("unbalanced braces in token '{token}'")]
    UnbalancedBraces {
        /// The malformed token.
        token: String,
    },

    /// A placeholder name contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid placeholder name '{0}'")]
    InvalidPlaceholderName(String),

    /// The same placeholder name appears twice.
    #[error("duplicate placeholder '{{{name}}}' in '{pattern}'")]
    DuplicatePlaceholder {
        /// The offending pattern.
        pattern: String,
        /// The repeated placeholder name.
        name: String,
    },
}
