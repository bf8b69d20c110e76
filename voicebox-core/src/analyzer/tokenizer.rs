//! Morphological tokenization seam.
//!
//! Morphological analysis is an external capability: given text, it produces
//! an ordered sequence of `(surface form, coarse word class)` pairs. The
//! pipeline consumes it through [`MorphologicalTokenizer`] and never
//! reimplements it.
//!
//! ## The contract
//!
//! - Stateless per call: no cross-call state leakage. Implementations may
//!   cache an internal model instance, but two calls with the same input
//!   must produce the same output.
//! - Coarse classes only: sub-classifications (名詞,一般 vs 名詞,固有名詞)
//!   are collapsed to [`WordClass`] by the implementation.
//! - Failure is recoverable: a [`TokenizeError`] propagates to the caller,
//!   which substitutes an empty result rather than aborting the run.
//!
//! [`PreSegmentedTokenizer`] ships as a minimal implementation for text that
//! is already whitespace-segmented (wakati-gaki); real deployments plug in a
//! dictionary-backed analyzer behind the same trait.

use thiserror::Error;
use voicebox_types::WordClass;

/// One unit emitted by morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form exactly as it appeared in the text.
    pub surface: String,
    /// Coarse word class.
    pub class: WordClass,
}

impl Morpheme {
    /// Creates a morpheme.
    #[must_use]
    pub fn new(surface: impl Into<String>, class: WordClass) -> Self {
        Self {
            surface: surface.into(),
            class,
        }
    }
}

/// Morphological analysis failed for a whole input.
///
/// Recoverable: the analysis run continues with an empty vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("morphological analysis failed: {reason}")]
pub struct TokenizeError {
    /// Human-readable failure detail from the underlying analyzer.
    pub reason: String,
}

impl TokenizeError {
    /// Creates an error from a failure reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Stateless-per-call morphological analysis service.
pub trait MorphologicalTokenizer {
    /// Splits `text` into an ordered sequence of morphemes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError`] when the underlying analyzer fails; the
    /// caller recovers by substituting an empty result.
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizeError>;
}

/// Tokenizer for pre-segmented (wakati) text.
///
/// Splits on whitespace and tags every token with one fixed class. Useful
/// when an upstream system has already segmented the text, and as a
/// deterministic vehicle for tests.
#[derive(Debug, Clone, Copy)]
pub struct PreSegmentedTokenizer {
    class: WordClass,
}

impl PreSegmentedTokenizer {
    /// Creates a tokenizer tagging every token with `class`.
    #[must_use]
    pub const fn new(class: WordClass) -> Self {
        Self { class }
    }
}

impl Default for PreSegmentedTokenizer {
    fn default() -> Self {
        Self::new(WordClass::Noun)
    }
}

impl MorphologicalTokenizer for PreSegmentedTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizeError> {
        Ok(text
            .split_whitespace()
            .map(|surface| Morpheme::new(surface, self.class))
            .collect())
    }
}
