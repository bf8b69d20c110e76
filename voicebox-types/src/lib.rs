//! Core types for the Voicebox feedback-analytics pipeline.
//!
//! This crate provides the fundamental types that are shared across
//! the Voicebox ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and any front end share the same types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Loader-friendly**: Everything the external row loader produces or the
//!   presenter consumes derives `serde` traits

#![warn(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp formats accepted when constructing a [`Record`] from a raw row.
///
/// Tried in order; the first successful parse wins. Rows exported from
/// spreadsheet tools vary between `-` and `/` separators and may omit seconds.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only fallbacks; parsed values get a midnight time component.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Leniently parses a raw timestamp cell.
///
/// Returns `None` for empty, whitespace-only, or unparseable input. A `None`
/// timestamp never matches a bounded period and sorts below every valid
/// datetime, but the record itself is kept in unfiltered views.
#[must_use]
pub fn parse_received_at(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// One customer-feedback entry.
///
/// Field semantics follow the source columns: `受付日時` (timestamp),
/// `店舗を選択してください。` (top-level location), `子要素` (leaf location)
/// and `内容` (free text).
///
/// A record with a missing or unparseable timestamp is excluded from every
/// bounded period but still appears in the all-time and unfiltered views.
/// A missing `text` is tolerated until an analysis run touches the record,
/// at which point it becomes a fatal [`AnalysisError::MissingText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Parsed reception timestamp; `None` means missing or unparseable.
    pub received_at: Option<NaiveDateTime>,
    /// Top-level location tag; optional in the source data.
    pub top_location: Option<String>,
    /// Leaf location tag (店舗); required for hierarchy filtering.
    pub leaf_location: String,
    /// Free-text comment; `None` only for malformed rows.
    pub text: Option<String>,
}

impl Record {
    /// Builds a record from raw row cells, parsing the timestamp leniently.
    ///
    /// An empty `top_location` cell is normalized to `None` so the hierarchy
    /// filter never ranks a blank value.
    #[must_use]
    pub fn from_row(
        raw_timestamp: &str,
        top_location: Option<&str>,
        leaf_location: &str,
        text: Option<&str>,
    ) -> Self {
        Self {
            received_at: parse_received_at(raw_timestamp),
            top_location: top_location
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            leaf_location: leaf_location.to_owned(),
            text: text.map(str::to_owned),
        }
    }

    /// Date portion of the timestamp, used for period matching.
    #[inline]
    #[must_use]
    pub fn received_date(&self) -> Option<NaiveDate> {
        self.received_at.map(|dt| dt.date())
    }
}

/// A named, date-computed time window used to bound record selection.
///
/// Every variant except [`Period::AllTime`] resolves to an inclusive
/// `[start, end]` date pair computed fresh from the current date at query
/// time; windows are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// From the 1st of the current month through today.
    CurrentMonth,
    /// The whole previous calendar month.
    PreviousMonth,
    /// The 90 days up to and including today.
    Last90Days,
    /// The 180 days up to and including today.
    Last180Days,
    /// From January 1st of the current year through today.
    YearToDate,
    /// The whole previous calendar year.
    PreviousYear,
    /// No date comparison at all; every record matches.
    AllTime,
}

impl Period {
    /// All periods in presentation order.
    pub const ALL: [Period; 7] = [
        Period::CurrentMonth,
        Period::PreviousMonth,
        Period::Last90Days,
        Period::Last180Days,
        Period::YearToDate,
        Period::PreviousYear,
        Period::AllTime,
    ];

    /// Display name, as shown in the period selector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Period::CurrentMonth => "当月",
            Period::PreviousMonth => "前月",
            Period::Last90Days => "3ヶ月",
            Period::Last180Days => "6ヶ月",
            Period::YearToDate => "今年",
            Period::PreviousYear => "去年",
            Period::AllTime => "全て",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse grammatical category assigned by the morphological tokenizer.
///
/// Sub-classifications (e.g. 名詞,一般 vs 名詞,固有名詞) are collapsed by the
/// tokenizer implementation; the pipeline only ever sees the coarse class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    /// 名詞 — retained by the vocabulary policy.
    Noun,
    /// 形容詞 — retained by the vocabulary policy.
    Adjective,
    /// Any other class — always filtered out.
    Other,
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WordClass::Noun => "名詞",
            WordClass::Adjective => "形容詞",
            WordClass::Other => "その他",
        })
    }
}

/// A retained lexical unit: surface form plus coarse word class.
///
/// Produced transiently per analysis run; never persisted. Two tokens with
/// the same surface but different classes are distinct frequency keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyToken {
    /// Surface form exactly as emitted by the tokenizer.
    pub surface: String,
    /// Coarse word class; [`WordClass::Noun`] or [`WordClass::Adjective`]
    /// once a token has passed the vocabulary policy.
    pub class: WordClass,
}

impl VocabularyToken {
    /// Creates a token from a surface form and class.
    #[must_use]
    pub fn new(surface: impl Into<String>, class: WordClass) -> Self {
        Self {
            surface: surface.into(),
            class,
        }
    }
}

impl fmt::Display for VocabularyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.surface, self.class)
    }
}

/// One row of the ranked word-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyEntry {
    /// The counted token.
    pub token: VocabularyToken,
    /// Occurrence count; always at least 1.
    pub count: u64,
}

impl WordFrequencyEntry {
    /// Selector label in `"surface (count)"` form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.token.surface, self.count)
    }
}

/// A `(timestamp, text, leaf_location)` tuple copied from a record that
/// survived all active filters.
///
/// Owned by the sentence index for the duration of one analysis run and
/// rebuilt whenever upstream filters change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Reception timestamp; `None` for unknown.
    pub received_at: Option<NaiveDateTime>,
    /// The original comment text.
    pub text: String,
    /// Leaf location the comment was filed under.
    pub leaf_location: String,
}

impl SentenceRecord {
    /// Total-order sort key.
    ///
    /// `Option<NaiveDateTime>` orders `None` below every valid datetime, so a
    /// missing timestamp is the explicit minimum: descending listings put
    /// unknown dates last.
    #[inline]
    #[must_use]
    pub fn sort_key(&self) -> Option<NaiveDateTime> {
        self.received_at
    }
}

/// Fatal errors for a whole analysis run.
///
/// Recoverable failures (tokenizer, renderer) are owned by the modules that
/// raise them; anything here aborts the run with no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A surviving record has no text field (`内容` column absent or empty).
    #[error("record under \"{leaf_location}\" has no 内容 (text) field")]
    MissingText {
        /// Leaf location of the offending record, for the error report.
        leaf_location: String,
    },
    /// No source records were supplied at all.
    #[error("no feedback records available")]
    EmptyInput,
}
