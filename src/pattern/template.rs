use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, SurveyError};

/// Identifier token: a function name or keyword such as `array`, optionally
/// surrounded by spaces or tabs.
pub const IDENTIFIER_TOKEN: char = 'S';
pub const IDENTIFIER_FRAGMENT: &str = r"[ \t]*[a-z][a-z0-9_]+[ \t]*";

/// Newline token: a line break immediately followed by an indentation of one
/// or more spaces or tabs.
pub const NEWLINE_TOKEN: char = 'n';
pub const NEWLINE_FRAGMENT: &str = r"[\r\n][ \t]+";

/// Templates surveyed when no configuration overrides them.
pub const BUILTIN_TEMPLATES: [&str; 2] = ["S(S(n", "S(nS(n"];

/// An abstract layout pattern such as `S(S(n`.
///
/// Identity is the literal template string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PatternTemplate(String);

impl PatternTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatternTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

/// Token name to regex fragment dictionary, in substitution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDefinitions {
    tokens: IndexMap<char, String>,
}

impl TokenDefinitions {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tokens: IndexMap::new(),
        }
    }

    /// Adds (or replaces) a token. Replacing keeps the original position.
    #[must_use]
    pub fn with_token(mut self, name: char, fragment: impl Into<String>) -> Self {
        self.tokens.insert(name, fragment.into());
        self
    }

    /// Builds definitions from string-keyed pairs, as read from configuration.
    ///
    /// # Errors
    /// Returns an error if a token name is not exactly one character.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut definitions = Self::empty();
        for (name, fragment) in pairs {
            let mut chars = name.chars();
            let (Some(token), None) = (chars.next(), chars.next()) else {
                return Err(SurveyError::Config(format!(
                    "Token name '{name}' must be exactly one character"
                )));
            };
            definitions = definitions.with_token(token, fragment);
        }
        Ok(definitions)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.tokens.iter().map(|(name, fragment)| (*name, fragment.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenDefinitions {
    fn default() -> Self {
        Self::empty()
            .with_token(IDENTIFIER_TOKEN, IDENTIFIER_FRAGMENT)
            .with_token(NEWLINE_TOKEN, NEWLINE_FRAGMENT)
    }
}

/// The immutable pattern configuration handed to a surveyor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    pub templates: Vec<PatternTemplate>,
    pub tokens: TokenDefinitions,
}

impl PatternSet {
    #[must_use]
    pub const fn new(templates: Vec<PatternTemplate>, tokens: TokenDefinitions) -> Self {
        Self { templates, tokens }
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES
                .iter()
                .map(|t| PatternTemplate::from(*t))
                .collect(),
            tokens: TokenDefinitions::default(),
        }
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
