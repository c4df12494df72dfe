use super::*;
use crate::pattern::PatternTemplate;
use crate::scanner::SkippedFile;
use crate::survey::PatternCounters;

fn report(skipped: Vec<SkippedFile>) -> SurveyReport {
    let templates = [PatternTemplate::from("S(S(n"), PatternTemplate::from("S(nS(n")];
    let mut counters = PatternCounters::new(&templates);
    counters.add_all(&[12, 3]);
    SurveyReport {
        counters,
        files_analyzed: 7,
        skipped,
    }
}

#[test]
fn text_lists_each_pattern_in_order() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report(vec![]))
        .unwrap();

    assert_eq!(
        output,
        "S(S(n : 12 occurrences found.\nS(nS(n : 3 occurrences found.\n"
    );
}

#[test]
fn text_verbose_adds_summary() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&report(vec![]))
        .unwrap();

    assert!(output.ends_with("\n7 files analyzed, 0 skipped\n"));
}

#[test]
fn text_mentions_skipped_entries() {
    let skipped = vec![SkippedFile::new("src/secret.php", "permission denied")];
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report(skipped))
        .unwrap();

    assert!(output.contains("Skipped 1 unreadable entries"));
    assert!(!output.contains("secret.php"));
}

#[test]
fn text_verbose_lists_skipped_paths() {
    let skipped = vec![SkippedFile::new("src/secret.php", "permission denied")];
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&report(skipped))
        .unwrap();

    assert!(output.contains("secret.php: permission denied"));
}

#[test]
fn text_with_colors_wraps_counts() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&report(vec![]))
        .unwrap();

    assert!(output.contains("\x1b[36m12\x1b[0m"));
}
