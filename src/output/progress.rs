use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Surveying {prefix} [{bar:40.cyan/blue}] {pos}/{len} files";

/// Per-file progress of a survey, drawn on stderr.
///
/// `ProgressBar` is internally synchronized, so rayon workers share one bar
/// through `&ScanProgress`.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Bar over `total` files labelled with the surveyed extension. Nothing is
    /// drawn unless `enabled` and stderr is a terminal.
    #[must_use]
    pub fn new(total: u64, extension: &str, enabled: bool) -> Self {
        let target = if enabled && std::io::stderr().is_terminal() {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self::with_target(total, extension, target)
    }

    fn with_target(total: u64, extension: &str, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), target)
            .with_prefix(format!(".{extension}"));
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
