//! Command pattern parsing and matching.
//!
//! A pattern is a whitespace-separated sequence of literal words and `{name}`
//! placeholders. Inbound text matches when it has the same number of words,
//! every literal word is equal, and each placeholder binds the word in its
//! position.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::CommandPatternError;

/// One token of a command pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternToken {
    /// A word that must appear verbatim.
    Literal(String),
    /// A named slot bound to the word in the same position.
    Placeholder(String),
}

/// A parsed command pattern such as `disable game {game}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPattern {
    raw: String,
    tokens: Vec<PatternToken>,
}

impl CommandPattern {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CommandPatternError`] when the pattern is empty or a
    /// placeholder is malformed or repeated.
    pub fn parse(pattern: &str) -> Result<Self, CommandPatternError> {
        let mut tokens = Vec::new();
        let mut placeholder_names = HashSet::new();

        for word in pattern.split_whitespace() {
            let token = parse_token(pattern, word)?;
            if let PatternToken::Placeholder(name) = &token
                && !placeholder_names.insert(name.clone())
            {
                return Err(CommandPatternError::DuplicatePlaceholder {
                    pattern: pattern.trim().to_owned(),
                    name: name.clone(),
                });
            }
            tokens.push(token);
        }

        if tokens.is_empty() {
            return Err(CommandPatternError::EmptyPattern);
        }

        let raw = tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Self { raw, tokens })
    }

    /// Returns the normalized pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Returns the placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            PatternToken::Placeholder(name) => Some(name.as_str()),
            PatternToken::Literal(_) => None,
        })
    }

    /// Returns the registration key: the pattern with every placeholder name
    /// erased, so `disable game {game}` and `disable game {name}` collide.
    #[must_use]
    pub fn signature(&self) -> String {
        self.tokens
            .iter()
            .map(|token| match token {
                PatternToken::Literal(word) => word.as_str(),
                PatternToken::Placeholder(_) => "{}",
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Matches whitespace-tokenized inbound text against the pattern.
    ///
    /// Returns the bound placeholder values on a match.
    #[must_use]
    pub fn match_text(&self, text: &str) -> Option<BTreeMap<String, String>> {
        let words: Vec<&str> = text.split_whitespace().collect();
        self.match_words(&words)
    }

    /// Matches pre-tokenized words against the pattern.
    #[must_use]
    pub fn match_words(&self, words: &[&str]) -> Option<BTreeMap<String, String>> {
        if words.len() != self.tokens.len() {
            return None;
        }

        let mut parameters = BTreeMap::new();
        for (token, word) in self.tokens.iter().zip(words) {
            match token {
                PatternToken::Literal(literal) if literal == word => {}
                PatternToken::Literal(_) => return None,
                PatternToken::Placeholder(name) => {
                    parameters.insert(name.clone(), (*word).to_owned());
                }
            }
        }
        Some(parameters)
    }
}

impl fmt::Display for CommandPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(word) => f.write_str(word),
            Self::Placeholder(name) => write!(f, "{{{name}}}"),
        }
    }
}

fn parse_token(pattern: &str, word: &str) -> Result<PatternToken, CommandPatternError> {
    let opens = word.starts_with('{');
    let closes = word.ends_with('}');

    match (opens, closes) {
        (true, true) => {
            let name = word
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
                .unwrap_or_default();
            if name.is_empty() {
                return Err(CommandPatternError::EmptyPlaceholder {
                    pattern: pattern.trim().to_owned(),
                });
            }
            if !is_valid_name(name) {
                return Err(CommandPatternError::InvalidPlaceholderName(name.to_owned()));
            }
            Ok(PatternToken::Placeholder(name.to_owned()))
        }
        (false, false) if !word.contains(['{', '}']) => Ok(PatternToken::Literal(word.to_owned())),
        _ => Err(CommandPatternError::UnbalancedBraces {
            token: word.to_owned(),
        }),
    }
}

fn is_valid_name(value: &str) -> bool {
    value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}
