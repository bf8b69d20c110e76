//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: the morphological-analysis seam plus a pre-segmented fallback
//! - **Stopwords**: the static domain stop-word asset
//! - **Vocabulary**: the meaningful-vocabulary retention policy

pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;

pub use stopwords::STOP_WORDS;
pub use tokenizer::{Morpheme, MorphologicalTokenizer, PreSegmentedTokenizer, TokenizeError};
pub use vocabulary::VocabularyPolicy;
