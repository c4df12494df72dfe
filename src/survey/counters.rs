use indexmap::IndexMap;
use serde::Serialize;

use crate::pattern::PatternTemplate;

/// Occurrence count per pattern template, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternCounters {
    counts: IndexMap<PatternTemplate, usize>,
}

impl PatternCounters {
    /// Counters for the given templates, all at zero.
    pub fn new<'a>(templates: impl IntoIterator<Item = &'a PatternTemplate>) -> Self {
        Self {
            counts: templates.into_iter().map(|t| (t.clone(), 0)).collect(),
        }
    }

    /// Set every counter back to zero, keeping the entries.
    pub fn reset(&mut self) {
        self.counts.values_mut().for_each(|count| *count = 0);
    }

    /// Add per-pattern counts given in template order.
    pub(crate) fn add_all(&mut self, counts: &[usize]) {
        for (total, count) in self.counts.values_mut().zip(counts) {
            *total += count;
        }
    }

    #[must_use]
    pub fn get(&self, template: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(t, _)| t.as_str() == template)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PatternTemplate, usize)> {
        self.counts.iter().map(|(t, count)| (t, *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum over all patterns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> Vec<PatternTemplate> {
        vec![PatternTemplate::from("S(S(n"), PatternTemplate::from("S(nS(n")]
    }

    #[test]
    fn new_counters_start_at_zero() {
        let counters = PatternCounters::new(&templates());
        assert_eq!(counters.len(), 2);
        assert_eq!(counters.get("S(S(n"), Some(0));
        assert_eq!(counters.get("S(nS(n"), Some(0));
        assert_eq!(counters.get("unknown"), None);
    }

    #[test]
    fn add_all_accumulates_in_order() {
        let mut counters = PatternCounters::new(&templates());
        counters.add_all(&[2, 1]);
        counters.add_all(&[3, 0]);
        assert_eq!(counters.get("S(S(n"), Some(5));
        assert_eq!(counters.get("S(nS(n"), Some(1));
        assert_eq!(counters.total(), 6);
    }

    #[test]
    fn reset_keeps_entries() {
        let mut counters = PatternCounters::new(&templates());
        counters.add_all(&[4, 4]);
        counters.reset();
        assert_eq!(counters.len(), 2);
        assert_eq!(counters.total(), 0);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut counters = PatternCounters::new(&templates());
        counters.add_all(&[1, 2]);
        let json = serde_json::to_string(&counters).unwrap();
        assert_eq!(json, r#"{"S(S(n":1,"S(nS(n":2}"#);
    }
}
