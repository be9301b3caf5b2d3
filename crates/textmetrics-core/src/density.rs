//! Keyword density: each distinct word's share of the total word count.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyMap;

/// Density of a single distinct word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordDensity {
    /// The word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Share of all words, as a percentage rounded to 2 decimal places.
    pub percentage: f64,
}

/// Compute the density of every distinct word in `freq`.
///
/// Entries follow the first-seen order of `freq`. A `total_words` of zero
/// yields an empty table.
pub fn compute_keyword_density(freq: &FrequencyMap, total_words: usize) -> Vec<KeywordDensity> {
    if total_words == 0 {
        return Vec::new();
    }

    let total = total_words as f64;
    freq.iter()
        .map(|(word, count)| KeywordDensity {
            word: word.to_string(),
            count,
            percentage: round2((count as f64 / total) * 100.0),
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
