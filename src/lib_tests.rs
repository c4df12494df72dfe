use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_ne!(EXIT_SURVEY_ERROR, EXIT_SUCCESS);
    assert_ne!(EXIT_CONFIG_ERROR, EXIT_SURVEY_ERROR);
}

#[test]
fn default_surveyor_counts_builtin_patterns() {
    let surveyor = Surveyor::with_defaults().unwrap();
    let templates: Vec<_> = surveyor
        .counters()
        .iter()
        .map(|(template, count)| (template.to_string(), count))
        .collect();
    assert_eq!(
        templates,
        vec![("S(S(n".to_string(), 0), ("S(nS(n".to_string(), 0)]
    );
}
