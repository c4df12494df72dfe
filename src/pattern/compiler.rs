use indexmap::IndexMap;
use regex::bytes::{Regex, RegexBuilder};

use super::{PatternSet, PatternTemplate, TokenDefinitions};
use crate::error::{Result, SurveyError};

/// A template together with its case-insensitive regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: PatternTemplate,
    regex: Regex,
}

impl CompiledPattern {
    #[must_use]
    pub const fn template(&self) -> &PatternTemplate {
        &self.template
    }

    /// Number of non-overlapping matches in `haystack`.
    #[must_use]
    pub fn count_matches(&self, haystack: &[u8]) -> usize {
        self.regex.find_iter(haystack).count()
    }
}

/// Compiled patterns keyed by template, in template order.
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    patterns: IndexMap<PatternTemplate, CompiledPattern>,
}

impl CompiledPatterns {
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.values()
    }

    pub fn templates(&self) -> impl Iterator<Item = &PatternTemplate> {
        self.patterns.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Match counts for every pattern, in template order.
    #[must_use]
    pub fn count_all(&self, haystack: &[u8]) -> Vec<usize> {
        self.iter().map(|p| p.count_matches(haystack)).collect()
    }
}

/// Translates pattern templates into regular expressions.
pub struct PatternCompiler;

impl PatternCompiler {
    /// Compile every template against the token dictionary.
    ///
    /// Duplicate templates collapse into one entry.
    ///
    /// # Errors
    /// Returns [`SurveyError::Compilation`] if a template expands to an invalid regex.
    pub fn compile(
        templates: &[PatternTemplate],
        tokens: &TokenDefinitions,
    ) -> Result<CompiledPatterns> {
        let mut patterns = IndexMap::with_capacity(templates.len());
        for template in templates {
            if patterns.contains_key(template) {
                continue;
            }
            let source = Self::expand(template, tokens);
            // ASCII-only classes: `(?i)[a-z]` must not match `ſ` or the Kelvin sign.
            let regex = RegexBuilder::new(&source)
                .case_insensitive(true)
                .unicode(false)
                .build()
                .map_err(|e| SurveyError::Compilation {
                    template: template.to_string(),
                    source: e,
                })?;
            tracing::debug!("compiled {template} as {}", regex.as_str());
            patterns.insert(
                template.clone(),
                CompiledPattern {
                    template: template.clone(),
                    regex,
                },
            );
        }
        Ok(CompiledPatterns { patterns })
    }

    /// Compile a whole pattern set.
    ///
    /// # Errors
    /// Returns an error if any template fails to compile.
    pub fn compile_set(set: &PatternSet) -> Result<CompiledPatterns> {
        Self::compile(&set.templates, &set.tokens)
    }

    /// Escape the template, then substitute each token name in dictionary order.
    ///
    /// A token name must not occur inside a fragment substituted before it.
    #[must_use]
    pub fn expand(template: &PatternTemplate, tokens: &TokenDefinitions) -> String {
        tokens
            .iter()
            .fold(regex::escape(template.as_str()), |expanded, (name, fragment)| {
                expanded.replace(name, fragment)
            })
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
