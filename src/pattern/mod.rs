//! Pattern templates and their translation into regular expressions.
//!
//! A template such as `S(S(n` is written in a tiny token language: each
//! token name is a single character standing for a regex fragment, every
//! other character is matched literally.

mod compiler;
mod template;

pub use compiler::{CompiledPattern, CompiledPatterns, PatternCompiler};
pub use template::{
    BUILTIN_TEMPLATES, IDENTIFIER_FRAGMENT, IDENTIFIER_TOKEN, NEWLINE_FRAGMENT, NEWLINE_TOKEN,
    PatternSet, PatternTemplate, TokenDefinitions,
};
