use serde::Serialize;

use crate::error::Result;
use crate::survey::SurveyReport;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    patterns: Vec<PatternResult<'a>>,
    files_analyzed: usize,
    skipped: Vec<SkippedEntry>,
}

#[derive(Serialize)]
struct PatternResult<'a> {
    template: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct SkippedEntry {
    path: String,
    reason: String,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SurveyReport) -> Result<String> {
        let output = JsonOutput {
            patterns: report
                .counters
                .iter()
                .map(|(template, count)| PatternResult {
                    template: template.as_str(),
                    count,
                })
                .collect(),
            files_analyzed: report.files_analyzed,
            skipped: report
                .skipped
                .iter()
                .map(|s| SkippedEntry {
                    path: s.path.display().to_string(),
                    reason: s.reason.clone(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
