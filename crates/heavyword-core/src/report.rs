//! Threshold-based reporting over the exact counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::summary::ExactCounts;

/// A single reported word with its exact count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEntry {
    /// The reported word.
    pub word: String,
    /// Exact number of occurrences counted in pass 2.
    pub count: u64,
}

/// The frequency summary emitted after both passes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SummaryReport {
    /// Words meeting the threshold, in first-insertion order.
    pub entries: Vec<ReportEntry>,
    /// Number of entries emitted.
    pub emitted: usize,
    /// The reporting threshold, `floor(filtered_words / k)`.
    pub threshold: u64,
    /// Total tokens that passed the length filter in pass 1.
    pub filtered_words: u64,
}

/// Filter the exact counts down to words occurring at least
/// `floor(filtered / k)` times, preserving insertion order.
///
/// `k` must be at least 1; the engine validates this before the passes run.
#[tracing::instrument(skip(exact), fields(words = exact.len()))]
pub fn build_report(exact: &ExactCounts, filtered: u64, k: u64) -> SummaryReport {
    let threshold = filtered / k;
    let entries: Vec<ReportEntry> = exact
        .iter()
        .filter(|&(_, count)| count >= threshold)
        .map(|(word, count)| ReportEntry {
            word: word.to_string(),
            count,
        })
        .collect();

    SummaryReport {
        emitted: entries.len(),
        entries,
        threshold,
        filtered_words: filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{CandidateTracker, ExactCounter};

    fn exact_counts(pass1: &[&str], pass2: &[&str], k: u64) -> (ExactCounts, u64) {
        let mut tracker = CandidateTracker::new(k, 2);
        for word in pass1 {
            tracker.observe(word);
        }
        let candidates = tracker.finish();
        let filtered = candidates.filtered_count();

        let mut exact = ExactCounter::new(&candidates, 2);
        for word in pass2 {
            exact.observe(word);
        }
        (exact.finish(), filtered)
    }

    #[test]
    fn emits_words_meeting_threshold_in_order() {
        let stream = ["aa", "bb", "aa", "cc", "aa", "bb"];
        let (exact, filtered) = exact_counts(&stream, &stream, 10);
        // threshold = 6 / 10 = 0, everything passes.
        let report = build_report(&exact, filtered, 10);
        assert_eq!(report.threshold, 0);
        assert_eq!(report.emitted, 3);
        assert_eq!(report.entries[0].word, "aa");
        assert_eq!(report.entries[0].count, 3);
    }

    #[test]
    fn threshold_excludes_rare_words() {
        let stream = ["aa", "aa", "aa", "aa", "bb", "cc"];
        let (exact, filtered) = exact_counts(&stream, &stream, 2);
        // threshold = 6 / 2 = 3: only "aa" qualifies.
        let report = build_report(&exact, filtered, 2);
        assert_eq!(report.threshold, 3);
        assert_eq!(report.emitted, 1);
        assert_eq!(report.entries[0].word, "aa");
        assert_eq!(report.entries[0].count, 4);
    }

    #[test]
    fn empty_exact_counts_emit_nothing() {
        let (exact, filtered) = exact_counts(&["aa", "bb", "aa"], &[], 1);
        let report = build_report(&exact, filtered, 1);
        assert_eq!(report.emitted, 0);
        assert!(report.entries.is_empty());
        assert_eq!(report.filtered_words, 3);
    }

    #[test]
    fn report_serializes_to_json() {
        let stream = ["aa", "aa", "bb"];
        let (exact, filtered) = exact_counts(&stream, &stream, 100);
        let report = build_report(&exact, filtered, 100);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"word\":\"aa\""));
        assert!(json.contains("\"filtered_words\":3"));
    }
}
