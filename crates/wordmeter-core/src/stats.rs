//! One-shot text statistics.
//!
//! [`analyze`] runs every counter over a text and bundles the results into
//! a [`StatsReport`]. Reports are never updated in place; callers analyze
//! again whenever the text changes.

use std::num::NonZeroU32;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counters;
use crate::density::{self, Alphabet, LetterDensity};
use crate::reading_time::{DEFAULT_WORDS_PER_MINUTE, ReadingTime};

/// Text to analyze, together with the per-call display option.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    /// The text.
    pub text: &'a str,
    /// Leave whitespace out of the character count.
    pub exclude_spaces: bool,
}

impl<'a> AnalysisInput<'a> {
    /// Analyze `text` counting every character.
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            exclude_spaces: false,
        }
    }

    /// Set whether whitespace is left out of the character count.
    #[must_use]
    pub const fn exclude_spaces(mut self, exclude: bool) -> Self {
        self.exclude_spaces = exclude;
        self
    }
}

/// Knobs that stay fixed across analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Reading speed used for the reading-time estimate.
    pub words_per_minute: NonZeroU32,
    /// Letters counted by the density analysis.
    pub alphabet: Alphabet,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            alphabet: Alphabet::default(),
        }
    }
}

/// Statistics for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatsReport {
    /// Characters (grapheme clusters), possibly excluding whitespace.
    pub character_count: usize,
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Sentences delimited by `.`, `!` or `?`.
    pub sentence_count: usize,
    /// Human-readable reading time, e.g. `"3 minutes"` or `"1h 5min"`.
    pub reading_time: String,
    /// Reading time in whole minutes (rounded up).
    pub reading_minutes: u64,
    /// Every recognized letter, most frequent first.
    pub density: Vec<LetterDensity>,
}

/// Compute every statistic for `input`.
#[tracing::instrument(skip_all, fields(text_len = input.text.len(), exclude_spaces = input.exclude_spaces))]
pub fn analyze(input: &AnalysisInput<'_>, options: &AnalysisOptions) -> StatsReport {
    let word_count = counters::count_words(input.text);
    let reading_time = ReadingTime::from_word_count(word_count, options.words_per_minute);

    let report = StatsReport {
        character_count: counters::count_characters(input.text, input.exclude_spaces),
        word_count,
        sentence_count: counters::count_sentences(input.text),
        reading_time: reading_time.to_string(),
        reading_minutes: reading_time.total_minutes(),
        density: density::letter_density_with(input.text, &options.alphabet),
    };

    tracing::debug!(
        characters = report.character_count,
        words = report.word_count,
        sentences = report.sentence_count,
        letters = report.density.len(),
        "text analyzed"
    );
    report
}
