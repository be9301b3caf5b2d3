//! Full text report combining metrics, keyword density and top words.
//!
//! [`analyze`] is the single entry point a front end calls whenever the input
//! changes: it recomputes everything from scratch. The cleared state is
//! [`TextReport::default()`], which is exactly what `analyze("")` returns.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::density::{self, KeywordDensity};
use crate::error::AnalysisResult;
use crate::frequency::FrequencyMap;
use crate::metrics::{self, DEFAULT_WORDS_PER_MINUTE, TextMetrics};
use crate::ranking::{self, DEFAULT_TOP_N, TopEntry};
use crate::text;

/// Tunables for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisOptions {
    /// Reading speed used for the reading time estimate.
    pub words_per_minute: u32,
    /// Number of entries in the top-words ranking.
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Everything computed for one input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextReport {
    /// Word, character, line and unique-word counts.
    pub metrics: TextMetrics,
    /// Share of the total word count for each distinct word, in first-seen order.
    pub keyword_density: Vec<KeywordDensity>,
    /// Most frequent words, descending.
    pub top_words: Vec<TopEntry>,
}

/// Compute the full report for `text`.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::InvalidReadingSpeed`] when
/// `options.words_per_minute` is zero.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, options: &AnalysisOptions) -> AnalysisResult<TextReport> {
    let metrics = metrics::compute_metrics_with_speed(text, options.words_per_minute)?;
    let freq: FrequencyMap = text::tokenize(text).into_iter().collect();
    let keyword_density = density::compute_keyword_density(&freq, metrics.word_count);
    let top_words = ranking::compute_top_n(&freq, options.top_n);

    tracing::debug!(
        words = metrics.word_count,
        distinct = freq.len(),
        "analysis complete"
    );

    Ok(TextReport {
        metrics,
        keyword_density,
        top_words,
    })
}
