//! Meaningful-vocabulary retention policy.
//!
//! Classifies the morphemes coming out of the tokenizer seam and keeps only
//! those worth counting. A token is retained iff ALL of the following hold:
//!
//! 1. Its word class is exactly noun or adjective.
//! 2. Its surface form is longer than one character.
//! 3. It is not a two-character token made entirely of a lightweight
//!    ("particle") script — short grammatical fragments carry no meaning.
//! 4. It is alphanumeric (letters/digits of any script) and not purely
//!    numeric.
//! 5. It is not in the static stop-word list.
//! 6. It contains neither `@` nor `.` (email/domain/URL fragments).
//! 7. It is not a known location name (trailing 店 suffix stripped before
//!    comparison) — location names would otherwise dominate the vocabulary.
//! 8. It contains no emoji code points.
//!
//! The particle-script check defaults to Hiragana but takes its ranges as
//! data, so other scripts can opt in without new rule logic.

use core::ops::RangeInclusive;
use rustc_hash::FxHashSet;
use voicebox_types::{VocabularyToken, WordClass};

use crate::analyzer::stopwords::STOP_WORDS;
use crate::analyzer::tokenizer::{MorphologicalTokenizer, TokenizeError};

/// Hiragana block, the default particle script (rule 3).
pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';

/// Emoji blocks excluded by rule 8: emoticons, misc pictographs,
/// transport/map symbols and regional-indicator flags.
const EMOJI_RANGES: &[RangeInclusive<char>] = &[
    '\u{1F600}'..='\u{1F64F}',
    '\u{1F300}'..='\u{1F5FF}',
    '\u{1F680}'..='\u{1F6FF}',
    '\u{1F1E0}'..='\u{1F1FF}',
];

/// Strips the trailing shop marker from a location name.
///
/// 渋谷店 → 渋谷. Only a suffix is stripped; interior occurrences stay.
#[must_use]
pub fn strip_location_suffix(name: &str) -> &str {
    name.strip_suffix('店').unwrap_or(name)
}

#[inline]
fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|range| range.contains(&c))
}

/// The rule set determining which tokens count toward frequency analysis.
pub struct VocabularyPolicy {
    stop_words: FxHashSet<&'static str>,
    excluded_names: FxHashSet<String>,
    particle_ranges: Vec<RangeInclusive<char>>,
}

impl VocabularyPolicy {
    /// Builds a policy excluding the given location names (rule 7).
    ///
    /// Names are suffix-stripped before storage, so 渋谷店 excludes the
    /// token 渋谷.
    #[must_use]
    pub fn new<I, S>(known_location_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            excluded_names: known_location_names
                .into_iter()
                .map(|name| strip_location_suffix(name.as_ref()).to_owned())
                .collect(),
            particle_ranges: vec![HIRAGANA],
        }
    }

    /// Replaces the particle-script ranges used by rule 3.
    #[must_use]
    pub fn with_particle_ranges(mut self, ranges: Vec<RangeInclusive<char>>) -> Self {
        self.particle_ranges = ranges;
        self
    }

    #[inline]
    fn is_particle_script(&self, c: char) -> bool {
        self.particle_ranges.iter().any(|range| range.contains(&c))
    }

    /// Whether a single token passes all eight retention rules.
    #[must_use]
    pub fn retains(&self, surface: &str, class: WordClass) -> bool {
        if !matches!(class, WordClass::Noun | WordClass::Adjective) {
            return false;
        }

        let char_count = surface.chars().count();
        if char_count <= 1 {
            return false;
        }
        if char_count == 2 && surface.chars().all(|c| self.is_particle_script(c)) {
            return false;
        }

        if !surface.chars().all(char::is_alphanumeric) {
            return false;
        }
        if surface.chars().all(char::is_numeric) {
            return false;
        }

        if self.stop_words.contains(surface) {
            return false;
        }
        if surface.contains('@') || surface.contains('.') {
            return false;
        }
        if self.excluded_names.contains(surface) {
            return false;
        }

        !surface.chars().any(is_emoji)
    }

    /// Tokenizes `text` and keeps the retained tokens, in emission order.
    ///
    /// The result is a multiset: only frequencies matter downstream.
    ///
    /// # Errors
    ///
    /// Propagates [`TokenizeError`] from the tokenizer; callers substitute
    /// an empty result rather than aborting the analysis run.
    pub fn extract(
        &self,
        tokenizer: &dyn MorphologicalTokenizer,
        text: &str,
    ) -> Result<Vec<VocabularyToken>, TokenizeError> {
        let morphemes = tokenizer.tokenize(text)?;
        Ok(morphemes
            .into_iter()
            .filter(|m| self.retains(&m.surface, m.class))
            .map(|m| VocabularyToken::new(m.surface, m.class))
            .collect())
    }
}
