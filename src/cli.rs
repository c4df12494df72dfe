use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "php-survey")]
#[command(author, version, about = "Count line-continuation layout idioms in PHP code")]
#[command(long_about = "Counts how often nested-call layout patterns appear in a PHP codebase.\n\n\
    Patterns (default):\n  \
    S(S(n   two calls opened on one line, then an indented line break\n  \
    S(nS(n  one call opened per line, each followed by an indented line break\n\n\
    Exit codes:\n  \
    0 - Survey completed\n  \
    1 - Survey or acquisition error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a git repository and survey it
    Git(GitArgs),

    /// Download (or open) a zip archive and survey its contents
    Zip(ZipArgs),

    /// Survey a local directory in place
    Dir(DirArgs),
}

#[derive(Parser, Debug)]
pub struct GitArgs {
    /// Repository URL to clone
    #[arg(value_name = "GIT_URL")]
    pub url: String,

    #[command(flatten)]
    pub survey: SurveyArgs,
}

#[derive(Parser, Debug)]
pub struct ZipArgs {
    /// Archive URL (http/https) or local path
    #[arg(value_name = "ZIP_URL")]
    pub url: String,

    #[command(flatten)]
    pub survey: SurveyArgs,
}

#[derive(Parser, Debug)]
pub struct DirArgs {
    /// Directory to survey
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub survey: SurveyArgs,
}

/// Options shared by every survey mode.
#[derive(Args, Debug, Clone, Default)]
pub struct SurveyArgs {
    /// Source file extension to survey (overrides config)
    #[arg(long)]
    pub ext: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Analyze files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
