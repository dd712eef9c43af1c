//! The two counting passes of the Misra-Gries summary.
//!
//! Pass 1 ([`CandidateTracker`]) keeps at most `k - 1` candidate words,
//! applying the decrement-all-and-prune rule whenever a new word arrives at
//! full capacity. Any word whose true frequency exceeds `filtered / k` is
//! guaranteed to survive the pass; words below that bound may survive too.
//!
//! Pass 2 ([`ExactCounter`]) re-counts the stream exactly, restricted to
//! the words that survived pass 1.
//!
//! Both passes are builders that freeze into read-only views once their
//! phase completes, so pass-2 code cannot accidentally mutate pass-1 state.

use tracing::debug;

use crate::counts::OrderedCounts;

/// Pass-1 state: bounded candidate tracking with eviction.
#[derive(Debug)]
pub struct CandidateTracker {
    counts: OrderedCounts,
    /// Maximum number of tracked candidates, `k - 1`.
    capacity: usize,
    min_word_len: usize,
    filtered: u64,
}

impl CandidateTracker {
    /// Create a tracker for summary size `k` (capacity `k - 1`).
    ///
    /// `k = 1` is degenerate but well-defined: the candidate map stays
    /// empty and every filtered token triggers a no-op prune.
    pub fn new(k: u64, min_word_len: usize) -> Self {
        Self {
            counts: OrderedCounts::new(),
            capacity: usize::try_from(k.saturating_sub(1)).unwrap_or(usize::MAX),
            min_word_len,
            filtered: 0,
        }
    }

    /// Feed one token into the tracker.
    ///
    /// Tokens shorter than the minimum word length are discarded before
    /// they count toward the filtered total. At full capacity an unseen
    /// word votes against every candidate instead of entering the map,
    /// even if the prune frees a slot.
    pub fn observe(&mut self, word: &str) {
        if word.len() < self.min_word_len {
            return;
        }
        self.filtered += 1;

        if self.counts.len() < self.capacity || self.counts.contains(word) {
            self.counts.increment(word);
        } else {
            self.counts.retain_mut(|_, count| {
                *count -= 1;
                *count > 0
            });
        }
    }

    /// Number of candidates currently tracked. Never exceeds `k - 1`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no candidates are currently tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Freeze the tracker into a read-only candidate set.
    pub fn finish(self) -> CandidateSet {
        debug!(
            candidates = self.counts.len(),
            filtered = self.filtered,
            "pass 1 complete"
        );
        CandidateSet {
            counts: self.counts,
            filtered: self.filtered,
        }
    }
}

/// Frozen result of pass 1: the surviving candidates and the filtered total.
#[derive(Debug)]
pub struct CandidateSet {
    counts: OrderedCounts,
    filtered: u64,
}

impl CandidateSet {
    /// Whether `word` survived pass 1.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains(word)
    }

    /// Number of surviving candidates.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no candidates survived.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total tokens that passed the length filter during pass 1.
    pub fn filtered_count(&self) -> u64 {
        self.filtered
    }

    /// Iterate surviving candidates with their approximate pass-1 counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter()
    }
}

/// Pass-2 state: exact counting restricted to pass-1 survivors.
#[derive(Debug)]
pub struct ExactCounter<'a> {
    candidates: &'a CandidateSet,
    counts: OrderedCounts,
    min_word_len: usize,
}

impl<'a> ExactCounter<'a> {
    /// Create a counter over the frozen candidate set.
    pub fn new(candidates: &'a CandidateSet, min_word_len: usize) -> Self {
        Self {
            candidates,
            counts: OrderedCounts::new(),
            min_word_len,
        }
    }

    /// Feed one token into the counter. Non-candidate words are ignored;
    /// candidate words enter the exact map on first sight.
    pub fn observe(&mut self, word: &str) {
        if word.len() < self.min_word_len || !self.candidates.contains(word) {
            return;
        }
        self.counts.increment(word);
    }

    /// Freeze the counter into the read-only exact counts.
    ///
    /// A candidate that never reappeared in pass 2 is absent from the
    /// result rather than carried with a zero count.
    pub fn finish(self) -> ExactCounts {
        debug!(words = self.counts.len(), "pass 2 complete");
        ExactCounts {
            counts: self.counts,
        }
    }
}

/// Frozen result of pass 2: exact counts keyed by pass-2 first-sight order.
#[derive(Debug)]
pub struct ExactCounts {
    counts: OrderedCounts,
}

impl ExactCounts {
    /// Exact count for `word`, if it reappeared during pass 2.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word)
    }

    /// Number of words with a nonzero exact count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no candidate reappeared during pass 2.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(word, count)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut CandidateTracker, words: &[&str]) {
        for word in words {
            tracker.observe(word);
        }
    }

    #[test]
    fn capacity_never_exceeds_k_minus_one() {
        let mut tracker = CandidateTracker::new(4, 2);
        for word in ["aa", "bb", "cc", "dd", "ee", "aa", "ff", "bb", "gg"] {
            tracker.observe(word);
            assert!(tracker.len() <= 3);
        }
    }

    #[test]
    fn k_one_keeps_map_empty() {
        let mut tracker = CandidateTracker::new(1, 2);
        feed(&mut tracker, &["alpha", "alpha", "beta", "alpha"]);
        assert!(tracker.is_empty());

        let candidates = tracker.finish();
        assert_eq!(candidates.filtered_count(), 4);
        assert!(candidates.is_empty());
    }

    #[test]
    fn short_words_do_not_vote_or_count() {
        let mut tracker = CandidateTracker::new(10, 2);
        feed(&mut tracker, &["a", "i", "ox", "a"]);

        let candidates = tracker.finish();
        assert_eq!(candidates.filtered_count(), 1);
        assert!(candidates.contains("ox"));
        assert!(!candidates.contains("a"));
    }

    #[test]
    fn unseen_word_at_capacity_decrements_all() {
        // k = 3: capacity 2.
        let mut tracker = CandidateTracker::new(3, 2);
        feed(&mut tracker, &["aa", "aa", "bb"]);
        assert_eq!(tracker.len(), 2);

        // "cc" arrives at full capacity: aa 2->1, bb 1->0 (pruned),
        // and cc itself is dropped even though bb's slot is now free.
        tracker.observe("cc");
        let candidates = tracker.finish();
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains("aa"));
        assert!(!candidates.contains("bb"));
        assert!(!candidates.contains("cc"));
    }

    #[test]
    fn known_candidate_at_capacity_still_increments() {
        let mut tracker = CandidateTracker::new(3, 2);
        feed(&mut tracker, &["aa", "bb", "aa"]);
        let candidates = tracker.finish();
        assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![("aa", 2), ("bb", 1)]);
    }

    #[test]
    fn heavy_hitter_survives_synthetic_stream() {
        // Deterministic xorshift noise around one dominant word.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut rand = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        let noise = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
        let mut tracker = CandidateTracker::new(5, 2);
        let mut majority_count = 0u64;
        for _ in 0..10_000 {
            // "majority" is roughly every other token: frequency well above
            // filtered / 5, so it must survive.
            if rand() % 2 == 0 {
                tracker.observe("majority");
                majority_count += 1;
            } else {
                tracker.observe(noise[(rand() % 6) as usize]);
            }
        }

        let candidates = tracker.finish();
        assert!(majority_count > candidates.filtered_count() / 5);
        assert!(candidates.contains("majority"));
    }

    #[test]
    fn exact_counter_ignores_non_candidates() {
        let mut tracker = CandidateTracker::new(10, 2);
        feed(&mut tracker, &["aa", "bb"]);
        let candidates = tracker.finish();

        let mut exact = ExactCounter::new(&candidates, 2);
        for word in ["aa", "zz", "bb", "aa", "z"] {
            exact.observe(word);
        }
        let counts = exact.finish();
        assert_eq!(counts.get("aa"), Some(2));
        assert_eq!(counts.get("bb"), Some(1));
        assert_eq!(counts.get("zz"), None);
    }

    #[test]
    fn zero_reappearance_candidate_stays_absent() {
        let mut tracker = CandidateTracker::new(10, 2);
        feed(&mut tracker, &["aa", "bb"]);
        let candidates = tracker.finish();

        let mut exact = ExactCounter::new(&candidates, 2);
        exact.observe("aa");
        let counts = exact.finish();
        assert_eq!(counts.get("bb"), None);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn exact_counts_keyed_in_first_sight_order() {
        let mut tracker = CandidateTracker::new(10, 2);
        feed(&mut tracker, &["aa", "bb", "cc"]);
        let candidates = tracker.finish();

        let mut exact = ExactCounter::new(&candidates, 2);
        for word in ["cc", "aa", "cc", "bb"] {
            exact.observe(word);
        }
        let counts = exact.finish();
        let order: Vec<_> = counts.iter().map(|(w, _)| w.to_string()).collect();
        assert_eq!(order, vec!["cc", "aa", "bb"]);
    }
}
