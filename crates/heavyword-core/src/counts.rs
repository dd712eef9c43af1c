//! Insertion-ordered word/count container.
//!
//! Reporting order must match first-insertion order, so counts live in an
//! entry vector with a word → slot hash index alongside. A word that is
//! removed and later incremented again re-enters at the end of the order,
//! the same way a remove-then-put behaves in an insertion-ordered map.

use std::collections::HashMap;

/// Mapping from word to count that iterates in first-insertion order.
#[derive(Debug, Default, Clone)]
pub struct OrderedCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl OrderedCounts {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` is currently a key.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Current count for `word`, if present.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Add one to `word`'s count, inserting it at the end of the order with
    /// count 1 if absent.
    pub fn increment(&mut self, word: &str) {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    /// Keep only entries for which `keep` returns `true`, allowing it to
    /// mutate counts in place. Surviving entries retain their relative
    /// order; the slot index is rebuilt afterwards.
    pub fn retain_mut<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &mut u64) -> bool,
    {
        self.entries.retain_mut(|(word, count)| keep(word, count));
        self.index.clear();
        for (slot, (word, _)) in self.entries.iter().enumerate() {
            self.index.insert(word.clone(), slot);
        }
    }

    /// Iterate `(word, count)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}
