use super::*;
use crate::pattern::PatternTemplate;
use crate::scanner::SkippedFile;
use crate::survey::PatternCounters;

#[test]
fn json_output_structure() {
    let templates = [PatternTemplate::from("S(S(n"), PatternTemplate::from("S(nS(n")];
    let mut counters = PatternCounters::new(&templates);
    counters.add_all(&[5, 0]);
    let report = SurveyReport {
        counters,
        files_analyzed: 2,
        skipped: vec![SkippedFile::new("broken.php", "permission denied")],
    };

    let output = JsonFormatter.format(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["patterns"][0]["template"], "S(S(n");
    assert_eq!(parsed["patterns"][0]["count"], 5);
    assert_eq!(parsed["patterns"][1]["template"], "S(nS(n");
    assert_eq!(parsed["patterns"][1]["count"], 0);
    assert_eq!(parsed["files_analyzed"], 2);
    assert_eq!(parsed["skipped"][0]["path"], "broken.php");
    assert_eq!(parsed["skipped"][0]["reason"], "permission denied");
}

#[test]
fn json_empty_report() {
    let report = SurveyReport {
        counters: PatternCounters::default(),
        files_analyzed: 0,
        skipped: vec![],
    };

    let output = JsonFormatter.format(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["patterns"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["skipped"].as_array().unwrap().len(), 0);
}
