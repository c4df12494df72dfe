pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod scanner;
pub mod source;
pub mod survey;

pub use error::{Result, SurveyError};
pub use survey::{PatternCounters, SurveyReport, Surveyor};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SURVEY_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
