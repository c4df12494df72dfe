use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SurveyError};
use crate::pattern::{
    BUILTIN_TEMPLATES, IDENTIFIER_FRAGMENT, IDENTIFIER_TOKEN, NEWLINE_FRAGMENT, NEWLINE_TOKEN,
    PatternSet, PatternTemplate, TokenDefinitions,
};

/// Default source extension for eligible files.
pub const DEFAULT_EXTENSION: &str = "php";

/// Top-level configuration, as read from `.php-survey.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub patterns: PatternConfig,
}

/// Which files are surveyed, and how the tree is walked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extension of eligible files, compared case-insensitively.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Glob patterns of paths left out of the survey.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Follow symbolic links (link cycles are skipped).
    #[serde(default = "default_true")]
    pub follow_links: bool,

    /// Analyze files in parallel.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude: Vec::new(),
            follow_links: true,
            parallel: false,
        }
    }
}

/// Pattern templates and the token dictionary used to expand them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,

    /// Token name to regex fragment, substituted in the listed order.
    #[serde(default = "default_tokens")]
    pub tokens: IndexMap<String, String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            tokens: default_tokens(),
        }
    }
}

impl PatternConfig {
    /// Convert into the pattern set handed to a surveyor.
    ///
    /// # Errors
    /// Returns an error if a token name is not a single character.
    pub fn to_pattern_set(&self) -> Result<PatternSet> {
        let tokens = TokenDefinitions::from_pairs(
            self.tokens
                .iter()
                .map(|(name, fragment)| (name.as_str(), fragment.as_str())),
        )?;
        let templates = self
            .templates
            .iter()
            .map(|t| PatternTemplate::from(t.as_str()))
            .collect();
        Ok(PatternSet::new(templates, tokens))
    }
}

impl Config {
    /// Check values serde cannot express.
    ///
    /// # Errors
    /// Returns [`SurveyError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.scanner.extension.trim_start_matches('.').is_empty() {
            return Err(SurveyError::Config(
                "scanner.extension must not be empty".to_string(),
            ));
        }
        if self.patterns.templates.is_empty() {
            return Err(SurveyError::Config(
                "patterns.templates must list at least one template".to_string(),
            ));
        }
        if self.patterns.templates.iter().any(String::is_empty) {
            return Err(SurveyError::Config(
                "patterns.templates must not contain empty templates".to_string(),
            ));
        }
        self.patterns.to_pattern_set().map(|_| ())
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

const fn default_true() -> bool {
    true
}

fn default_templates() -> Vec<String> {
    BUILTIN_TEMPLATES.iter().map(ToString::to_string).collect()
}

fn default_tokens() -> IndexMap<String, String> {
    IndexMap::from([
        (IDENTIFIER_TOKEN.to_string(), IDENTIFIER_FRAGMENT.to_string()),
        (NEWLINE_TOKEN.to_string(), NEWLINE_FRAGMENT.to_string()),
    ])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
