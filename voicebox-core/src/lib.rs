//! Voicebox — customer-feedback text-analytics pipeline.
//!
//! One analysis run flows strictly left to right:
//!
//! Record Store → Range Filter → Hierarchy Filter → {Vocabulary → Frequency,
//! Sentence Index} → optional visual summary.
//!
//! Everything is single-threaded and synchronous; a run completes fully
//! before its [`pipeline::AnalysisReport`] is consumed. The morphological
//! tokenizer and the image renderer are external capabilities consumed
//! through traits ([`analyzer::MorphologicalTokenizer`],
//! [`render::SummaryRenderer`]).

pub mod analyzer;
pub mod filter;
pub mod frequency;
pub mod pipeline;
pub mod render;
pub mod sentence;

pub use analyzer::{Morpheme, MorphologicalTokenizer, PreSegmentedTokenizer, VocabularyPolicy};
pub use filter::{LocationChoice, PeriodSelection, RankedValue};
pub use frequency::FrequencyTable;
pub use pipeline::{AnalysisReport, AnalysisRequest};
pub use sentence::{SentenceIndex, WordSelection};
