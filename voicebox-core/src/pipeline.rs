//! One synchronous analysis run.
//!
//! Wires the stages end to end: Range Filter → Hierarchy Filter →
//! {Vocabulary → Frequency, Sentence Index} → optional visual summary.
//! The run completes fully before its report is consumed; there is no
//! background work, cancellation or retry.
//!
//! ## Error policy
//!
//! - Fatal, no partial output: no input records at all
//!   ([`AnalysisError::EmptyInput`]), or a surviving record without text
//!   ([`AnalysisError::MissingText`]).
//! - Recovered, run continues: tokenizer failure (empty vocabulary) and
//!   renderer failure (image omitted). Both are logged.

use chrono::NaiveDate;
use log::{info, warn};
use std::path::PathBuf;
use voicebox_types::{AnalysisError, Period, Record, WordFrequencyEntry};

use crate::analyzer::{MorphologicalTokenizer, VocabularyPolicy};
use crate::filter::location::{
    filter_leaf, filter_top, rank_leaf_locations, rank_top_locations, LocationChoice, RankedValue,
};
use crate::filter::period::filter_by_period;
use crate::frequency::{FrequencyTable, DEFAULT_TOP_WORDS};
use crate::render::{RenderConfig, SummaryRenderer};
use crate::sentence::SentenceIndex;

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Named period bounding record selection.
    pub period: Period,
    /// Top-location stage choice.
    pub top_location: LocationChoice,
    /// Leaf-location stage choice.
    pub leaf_location: LocationChoice,
    /// Size of the ranked word table in the report.
    pub top_words: usize,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            period: Period::AllTime,
            top_location: LocationChoice::All,
            leaf_location: LocationChoice::All,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

/// Where and how to write the visual summary.
pub struct SummaryOutput<'a> {
    /// The external renderer.
    pub renderer: &'a dyn SummaryRenderer,
    /// Renderer configuration.
    pub config: RenderConfig,
    /// Output image path; fully overwritten on every run.
    pub path: PathBuf,
}

/// Everything one analysis run hands to the presentation layer.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Period label with matched count, e.g. `"前月 (2)"`.
    pub period_label: String,
    /// Ranked top-location choices for the period subset.
    pub top_locations: Vec<RankedValue>,
    /// Ranked leaf-location choices for the stage-1 subset.
    pub leaf_locations: Vec<RankedValue>,
    /// Full frequency table, for the renderer and word selector.
    pub frequencies: FrequencyTable,
    /// Bounded top-N word ranking.
    pub words: Vec<WordFrequencyEntry>,
    /// Sum of all retained token counts.
    pub total_words: u64,
    /// Queryable snapshot of the filtered subset's sentences.
    pub sentences: SentenceIndex,
    /// Path of the written summary image, if rendering succeeded.
    pub summary_image: Option<PathBuf>,
}

impl AnalysisReport {
    /// Word-selector labels in `"word (count)"` form, ranking order.
    #[must_use]
    pub fn word_labels(&self) -> Vec<String> {
        self.words.iter().map(WordFrequencyEntry::label).collect()
    }
}

/// Runs one full analysis.
///
/// `today` is the logical clock for period resolution; `tokenizer` is the
/// external morphological capability; `summary` optionally writes the
/// frequency-weighted image.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if `records` is empty (reported before any
/// filtering), [`AnalysisError::MissingText`] if a record surviving all
/// filters has no text.
pub fn run(
    records: &[Record],
    request: &AnalysisRequest,
    today: NaiveDate,
    tokenizer: &dyn MorphologicalTokenizer,
    summary: Option<&SummaryOutput<'_>>,
) -> Result<AnalysisReport, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let selection = filter_by_period(request.period, records, today);
    let top_locations = rank_top_locations(&selection.records);

    let narrowed = filter_top(&selection.records, &request.top_location);
    info!("top-location stage: {} records", narrowed.len());

    let leaf_locations = rank_leaf_locations(&narrowed);
    let narrowed = filter_leaf(&narrowed, &request.leaf_location);
    info!("leaf-location stage: {} records", narrowed.len());

    let sentences = SentenceIndex::build(&narrowed)?;

    let joined: Vec<&str> = sentences.records().iter().map(|s| s.text.as_str()).collect();
    let text = joined.join(" ");

    let policy = VocabularyPolicy::new(leaf_locations.iter().map(|r| r.value.as_str()));
    let tokens = match policy.extract(tokenizer, &text) {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("{err}; continuing with an empty vocabulary");
            Vec::new()
        }
    };

    let frequencies = FrequencyTable::from_tokens(tokens);
    let words = frequencies.top(request.top_words);
    let total_words = frequencies.total_count();
    info!(
        "vocabulary: {} distinct words, {} total",
        frequencies.len(),
        total_words
    );

    let summary_image = summary.and_then(|out| {
        match out.renderer.render(&frequencies, &out.config, &out.path) {
            Ok(()) => Some(out.path.clone()),
            Err(err) => {
                warn!("{err}; continuing without a summary image");
                None
            }
        }
    });

    Ok(AnalysisReport {
        period_label: selection.label,
        top_locations,
        leaf_locations,
        frequencies,
        words,
        total_words,
        sentences,
        summary_image,
    })
}
