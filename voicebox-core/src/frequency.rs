//! Frequency Aggregator — ranked word counts.
//!
//! Counts occurrences of each distinct `(surface form, word class)` key and
//! exposes a ranked view. Ranking is descending by count with ties broken by
//! the order the aggregator first observed each key, so identical input
//! order always reproduces the same table.
//!
//! The full counted structure is kept intact; the bounded top-N view is a
//! copy and never mutates it.

use rustc_hash::FxHashMap;
use voicebox_types::{VocabularyToken, WordFrequencyEntry};

/// Default size of the bounded top-N view.
pub const DEFAULT_TOP_WORDS: usize = 100;

/// Count-bearing collection over `(surface, class)` keys.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    /// Key → slot in `entries`; slots never move once assigned.
    slots: FxHashMap<VocabularyToken, usize>,
    /// Entries in first-insertion order.
    entries: Vec<WordFrequencyEntry>,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a whole token multiset.
    #[must_use]
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = VocabularyToken>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Counts one token occurrence.
    pub fn add(&mut self, token: VocabularyToken) {
        match self.slots.get(&token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.slots.insert(token.clone(), self.entries.len());
                self.entries.push(WordFrequencyEntry { token, count: 1 });
            }
        }
    }

    /// Number of distinct keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no token has been counted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (the size of the retained multiset).
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for one key, 0 if absent.
    #[must_use]
    pub fn count(&self, token: &VocabularyToken) -> u64 {
        self.slots
            .get(token)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// All entries in first-insertion order, for the renderer boundary.
    #[must_use]
    pub fn counts(&self) -> &[WordFrequencyEntry] {
        &self.entries
    }

    /// Full ranking: count descending, ties in first-insertion order.
    #[must_use]
    pub fn ranked(&self) -> Vec<WordFrequencyEntry> {
        let mut ranked = self.entries.clone();
        // Stable sort keeps insertion order within equal counts.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Bounded top-N view of the ranking. Does not mutate the table.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<WordFrequencyEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
