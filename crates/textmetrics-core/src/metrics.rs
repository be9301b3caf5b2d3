//! Word, character, line and unique-word counts with a reading time estimate.

use std::collections::HashSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// Default reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimated time to read a text, rounded up to whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTime {
    /// Whole minutes, rounded up. Zero only for a text with no words.
    pub minutes: usize,
}

impl ReadingTime {
    /// Estimate reading time for `word_count` words at `words_per_minute`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidReadingSpeed`] when `words_per_minute`
    /// is zero.
    pub fn estimate(word_count: usize, words_per_minute: u32) -> AnalysisResult<Self> {
        if words_per_minute == 0 {
            return Err(AnalysisError::InvalidReadingSpeed(words_per_minute));
        }
        Ok(Self {
            minutes: word_count.div_ceil(words_per_minute as usize),
        })
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            f.write_str("Less than 1 min")
        } else {
            write!(f, "{} min", self.minutes)
        }
    }
}

/// Basic counts for a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Number of characters, whitespace included.
    pub char_count: usize,
    /// Number of `\n`-delimited lines (always at least 1).
    pub line_count: usize,
    /// Number of distinct tokens (case-sensitive).
    pub unique_word_count: usize,
    /// Estimated reading time.
    pub reading_time: ReadingTime,
}

impl Default for TextMetrics {
    /// Metrics of an empty text.
    fn default() -> Self {
        Self {
            word_count: 0,
            char_count: 0,
            line_count: 1,
            unique_word_count: 0,
            reading_time: ReadingTime::default(),
        }
    }
}

/// Compute metrics at the default reading speed of 200 words per minute.
pub fn compute_metrics(text: &str) -> TextMetrics {
    let tokens = text::tokenize(text);
    let reading_time = ReadingTime {
        minutes: tokens.len().div_ceil(DEFAULT_WORDS_PER_MINUTE as usize),
    };
    build(text, &tokens, reading_time)
}

/// Compute metrics with a custom reading speed.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidReadingSpeed`] when `words_per_minute`
/// is zero.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_metrics_with_speed(
    text: &str,
    words_per_minute: u32,
) -> AnalysisResult<TextMetrics> {
    let tokens = text::tokenize(text);
    let reading_time = ReadingTime::estimate(tokens.len(), words_per_minute)?;
    Ok(build(text, &tokens, reading_time))
}

fn build(text: &str, tokens: &[&str], reading_time: ReadingTime) -> TextMetrics {
    let unique: HashSet<&str> = tokens.iter().copied().collect();
    TextMetrics {
        word_count: tokens.len(),
        char_count: text::count_chars(text),
        line_count: text::count_lines(text),
        unique_word_count: unique.len(),
        reading_time,
    }
}
