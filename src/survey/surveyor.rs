use std::error::Error as _;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use super::{FileReader, PatternCounters, RealFileReader};
use crate::config::Config;
use crate::error::{Result, SurveyError};
use crate::output::ScanProgress;
use crate::pattern::{CompiledPatterns, PatternCompiler, PatternSet};
use crate::scanner::{DirectoryScanner, FileScanner, SkippedFile, SurveyFilter, TraversalOrder};

/// Outcome of one survey run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    /// Occurrences per pattern template.
    pub counters: PatternCounters,
    /// Number of eligible files whose content was matched.
    pub files_analyzed: usize,
    /// Files and directories left out of the counts, sorted by path.
    pub skipped: Vec<SkippedFile>,
}

/// Per-worker partial sums, merged once all files are analyzed.
struct Tally {
    counts: Vec<usize>,
    analyzed: usize,
    skipped: Vec<SkippedFile>,
}

impl Tally {
    fn new(patterns: usize) -> Self {
        Self {
            counts: vec![0; patterns],
            analyzed: 0,
            skipped: Vec::new(),
        }
    }

    fn absorb(&mut self, path: &Path, outcome: Result<Vec<usize>>) {
        match outcome {
            Ok(counts) => {
                for (total, count) in self.counts.iter_mut().zip(counts) {
                    *total += count;
                }
                self.analyzed += 1;
            }
            Err(e) => {
                let reason = e.source().map_or_else(|| e.to_string(), ToString::to_string);
                tracing::warn!("skipping {}: {reason}", path.display());
                self.skipped.push(SkippedFile::new(path, reason));
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (total, count) in self.counts.iter_mut().zip(other.counts) {
            *total += count;
        }
        self.analyzed += other.analyzed;
        self.skipped.extend(other.skipped);
        self
    }
}

/// Counts pattern occurrences across every eligible file of a directory tree.
///
/// The counters belong to the surveyor and are reset at the start of each
/// [`survey`](Self::survey); a surveyor can be reused for any number of trees.
pub struct Surveyor<R: FileReader = RealFileReader> {
    patterns: CompiledPatterns,
    scanner: DirectoryScanner<SurveyFilter>,
    reader: R,
    parallel: bool,
    show_progress: bool,
    counters: PatternCounters,
}

impl Surveyor {
    /// Build a surveyor for a pattern set and file filter.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new(patterns: &PatternSet, filter: SurveyFilter) -> Result<Self> {
        let patterns = PatternCompiler::compile_set(patterns)?;
        let counters = PatternCounters::new(patterns.templates());
        Ok(Self {
            patterns,
            scanner: DirectoryScanner::new(filter),
            reader: RealFileReader,
            parallel: false,
            show_progress: false,
            counters,
        })
    }

    /// Build a surveyor from loaded configuration.
    ///
    /// # Errors
    /// Returns an error if an exclude glob, token name or pattern is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let filter = SurveyFilter::new(&config.scanner.extension, &config.scanner.exclude)?;
        let surveyor = Self::new(&config.patterns.to_pattern_set()?, filter)?;
        Ok(surveyor
            .with_follow_links(config.scanner.follow_links)
            .with_parallel(config.scanner.parallel))
    }

    /// Surveyor for the built-in patterns over `.php` files.
    ///
    /// # Errors
    /// Returns an error if the built-in patterns fail to compile.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&PatternSet::default(), SurveyFilter::new("php", &[])?)
    }
}

impl<R: FileReader> Surveyor<R> {
    /// Replace the file reader.
    #[must_use]
    pub fn with_reader<T: FileReader>(self, reader: T) -> Surveyor<T> {
        Surveyor {
            patterns: self.patterns,
            scanner: self.scanner,
            reader,
            parallel: self.parallel,
            show_progress: self.show_progress,
            counters: self.counters,
        }
    }

    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.scanner = self.scanner.with_follow_links(follow_links);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.scanner = self.scanner.with_order(order);
        self
    }

    /// Analyze files on the rayon thread pool.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Show a progress bar on stderr while analyzing.
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Counters of the most recent survey.
    #[must_use]
    pub const fn counters(&self) -> &PatternCounters {
        &self.counters
    }

    fn analyze_file(&self, path: &Path) -> Result<Vec<usize>> {
        let content = self
            .reader
            .read(path)
            .map_err(|source| SurveyError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let counts = self.patterns.count_all(&content);
        tracing::debug!("{}: {counts:?}", path.display());
        Ok(counts)
    }
}

impl<R: FileReader + Sync> Surveyor<R> {
    /// Survey every eligible file below `root`.
    ///
    /// Unreadable files are skipped and listed in the report.
    ///
    /// # Errors
    /// Returns [`SurveyError::InvalidInput`] if `root` does not exist or is not
    /// a directory.
    pub fn survey(&mut self, root: &Path) -> Result<SurveyReport> {
        self.counters.reset();
        validate_root(root)?;

        let extension = self.scanner.filter().extension();
        let scan = self.scanner.scan(root)?;
        tracing::info!(
            "surveying {} .{extension} files under {}",
            scan.files.len(),
            root.display()
        );

        let progress = ScanProgress::new(scan.files.len() as u64, extension, self.show_progress);
        let tally = if self.parallel {
            self.tally_parallel(&scan.files, &progress)
        } else {
            self.tally_sequential(&scan.files, &progress)
        };
        progress.finish();

        self.counters.add_all(&tally.counts);

        let mut skipped = scan.skipped;
        skipped.extend(tally.skipped);
        skipped.sort();

        Ok(SurveyReport {
            counters: self.counters.clone(),
            files_analyzed: tally.analyzed,
            skipped,
        })
    }

    fn tally_sequential(&self, files: &[PathBuf], progress: &ScanProgress) -> Tally {
        files
            .iter()
            .fold(Tally::new(self.patterns.len()), |mut tally, path| {
                tally.absorb(path, self.analyze_file(path));
                progress.inc();
                tally
            })
    }

    fn tally_parallel(&self, files: &[PathBuf], progress: &ScanProgress) -> Tally {
        let patterns = self.patterns.len();
        files
            .par_iter()
            .fold(
                || Tally::new(patterns),
                |mut tally, path| {
                    tally.absorb(path, self.analyze_file(path));
                    progress.inc();
                    tally
                },
            )
            .reduce(|| Tally::new(patterns), Tally::merge)
    }
}

fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| SurveyError::InvalidInput {
        path: root.to_path_buf(),
        reason: if e.kind() == std::io::ErrorKind::NotFound {
            "directory does not exist".to_string()
        } else {
            e.to_string()
        },
    })?;

    if metadata.is_dir() {
        Ok(())
    } else {
        Err(SurveyError::InvalidInput {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        })
    }
}

#[cfg(test)]
#[path = "surveyor_tests.rs"]
mod tests;
