use std::fmt::Write;

use crate::error::Result;
use crate::survey::SurveyReport;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain text report: one `{template} : {count} occurrences found.` line per pattern.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &SurveyReport) -> Result<String> {
        let mut output = String::new();

        for (template, count) in report.counters.iter() {
            let count = self.colorize(&count.to_string(), ansi::CYAN);
            let _ = writeln!(output, "{template} : {count} occurrences found.");
        }

        if !report.skipped.is_empty() {
            let header = format!("Skipped {} unreadable entries", report.skipped.len());
            let _ = writeln!(output, "\n{}", self.colorize(&header, ansi::YELLOW));
            if self.verbose > 0 {
                for skipped in &report.skipped {
                    let _ = writeln!(output, "  {}: {}", skipped.path.display(), skipped.reason);
                }
            }
        }

        if self.verbose > 0 {
            let _ = writeln!(
                output,
                "\n{} files analyzed, {} skipped",
                report.files_analyzed,
                report.skipped.len()
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
