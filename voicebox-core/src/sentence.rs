//! Sentence Index — word-indexed retrieval of original comments.
//!
//! A per-run snapshot of `(timestamp, text, leaf location)` for every record
//! surviving the period and hierarchy filters. The snapshot is sorted once,
//! descending by timestamp with unknown timestamps last, and queried by
//! literal substring containment — no re-tokenization, case-sensitive,
//! exact surface match.
//!
//! Building is pure: the same filtered subset always yields the same ordered
//! index. The index owns its copies and is rebuilt whenever upstream filters
//! change.

use memchr::memmem::Finder;
use voicebox_types::{AnalysisError, Record, SentenceRecord};

/// A word selector: the "show all" pseudo-choice or one concrete word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSelection {
    /// Return every indexed sentence.
    All,
    /// Return sentences containing this word as a literal substring.
    Word(String),
}

impl WordSelection {
    /// The "show all sentences" selector label.
    pub const SHOW_ALL_LABEL: &'static str = "全ての文章を表示";

    /// Parses a selector label back into a selection.
    ///
    /// Word labels carry a `"word (count)"` suffix from the frequency table;
    /// the count is stripped.
    #[must_use]
    pub fn parse_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed == Self::SHOW_ALL_LABEL {
            return WordSelection::All;
        }
        let word = match trimmed.split_once('(') {
            Some((word, _)) => word.trim(),
            None => trimmed,
        };
        WordSelection::Word(word.to_owned())
    }
}

/// Queryable snapshot of filtered records' original text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentenceIndex {
    /// Sorted descending by timestamp; unknown timestamps last.
    records: Vec<SentenceRecord>,
}

impl SentenceIndex {
    /// Copies `(timestamp, text, leaf_location)` from every record in the
    /// filtered subset. No deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingText`] if any record has no text
    /// field; a malformed surviving record is fatal to the whole run.
    pub fn build(filtered: &[Record]) -> Result<Self, AnalysisError> {
        let mut records = Vec::with_capacity(filtered.len());

        for record in filtered {
            let Some(text) = record.text.as_deref() else {
                return Err(AnalysisError::MissingText {
                    leaf_location: record.leaf_location.clone(),
                });
            };
            records.push(SentenceRecord {
                received_at: record.received_at,
                text: text.to_owned(),
                leaf_location: record.leaf_location.clone(),
            });
        }

        // Stable sort: equal timestamps keep input order. `None` is the
        // minimum sort key, so it lands at the end of the descending list.
        records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

        Ok(Self { records })
    }

    /// All indexed sentences in display order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    /// Number of indexed sentences.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if nothing survived the upstream filters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sentences matching the selection, in index order.
    ///
    /// [`WordSelection::All`] returns every record; a word returns the
    /// records whose text contains it as a literal substring.
    #[must_use]
    pub fn query(&self, selection: &WordSelection) -> Vec<&SentenceRecord> {
        match selection {
            WordSelection::All => self.records.iter().collect(),
            WordSelection::Word(word) => {
                let finder = Finder::new(word.as_bytes());
                self.records
                    .iter()
                    .filter(|r| finder.find(r.text.as_bytes()).is_some())
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, text: &str) -> Record {
        Record::from_row(timestamp, Some("関東"), "渋谷店", Some(text))
    }

    fn sample() -> Vec<Record> {
        vec![
            record("2026-03-01 09:00:00", "駐車場が狭い"),
            record("2026-03-10 18:00:00", "スタッフの対応が良い"),
            record("不明", "シャワーの水圧が弱い"),
            record("2026-02-15 12:00:00", "駐車場の料金が高い"),
        ]
    }

    #[test]
    fn build_copies_every_record() {
        let index = SentenceIndex::build(&sample()).unwrap();
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn ordering_is_reverse_chronological_with_unknown_last() {
        let index = SentenceIndex::build(&sample()).unwrap();
        let texts: Vec<&str> = index.records().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "スタッフの対応が良い",
                "駐車場が狭い",
                "駐車場の料金が高い",
                "シャワーの水圧が弱い",
            ]
        );
    }

    #[test]
    fn show_all_returns_everything_in_order() {
        let index = SentenceIndex::build(&sample()).unwrap();
        let all = index.query(&WordSelection::All);
        assert_eq!(all.len(), index.len());
        for (queried, indexed) in all.iter().zip(index.records()) {
            assert_eq!(*queried, indexed);
        }
    }

    #[test]
    fn word_query_is_literal_substring_containment() {
        let index = SentenceIndex::build(&sample()).unwrap();
        let hits = index.query(&WordSelection::Word("駐車場".into()));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.text.contains("駐車場")));

        // Most recent hit first.
        assert_eq!(hits[0].text, "駐車場が狭い");
    }

    #[test]
    fn word_query_without_hits_is_empty() {
        let index = SentenceIndex::build(&sample()).unwrap();
        assert!(index.query(&WordSelection::Word("サウナ".into())).is_empty());
    }

    #[test]
    fn no_deduplication() {
        let records = vec![
            record("2026-03-01 09:00:00", "駐車場が狭い"),
            record("2026-03-01 09:00:00", "駐車場が狭い"),
        ];
        let index = SentenceIndex::build(&records).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn rebuild_from_same_subset_is_identical() {
        let records = sample();
        let first = SentenceIndex::build(&records).unwrap();
        let second = SentenceIndex::build(&records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_text_is_fatal() {
        let mut records = sample();
        records.push(Record::from_row("2026-03-02 10:00:00", None, "梅田店", None));

        let err = SentenceIndex::build(&records).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MissingText {
                leaf_location: "梅田店".into()
            }
        );
    }

    #[test]
    fn parse_label_round_trip() {
        assert_eq!(
            WordSelection::parse_label("全ての文章を表示"),
            WordSelection::All
        );
        assert_eq!(
            WordSelection::parse_label("駐車場 (12)"),
            WordSelection::Word("駐車場".into())
        );
    }
}
