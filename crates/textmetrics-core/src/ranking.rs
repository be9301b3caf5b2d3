//! Top-N most frequent words.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyMap;

/// Default number of entries in a top-words ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// A ranked word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TopEntry {
    /// The word.
    pub word: String,
    /// Number of occurrences.
    pub frequency: usize,
}

/// Rank distinct words by descending frequency and keep the first `n`.
///
/// Words with equal frequency keep their first-seen order.
#[tracing::instrument(skip(freq), fields(distinct = freq.len()))]
pub fn compute_top_n(freq: &FrequencyMap, n: usize) -> Vec<TopEntry> {
    let mut ranked: Vec<(&str, usize)> = freq.iter().collect();
    // Stable sort keeps first-seen order among ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, frequency)| TopEntry {
            word: word.to_string(),
            frequency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::compute_frequency_map;

    fn ranked_words(entries: &[TopEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn empty_map() {
        let freq = FrequencyMap::new();
        assert!(compute_top_n(&freq, 10).is_empty());
    }

    #[test]
    fn zero_n_is_empty() {
        let freq = compute_frequency_map(&["a", "b"]);
        assert!(compute_top_n(&freq, 0).is_empty());
    }

    #[test]
    fn sorted_by_frequency_descending() {
        let freq = compute_frequency_map(&["b", "a", "a", "c", "c", "c"]);
        let top = compute_top_n(&freq, 10);
        assert_eq!(ranked_words(&top), vec!["c", "a", "b"]);
        assert_eq!(top[0].frequency, 3);
        assert_eq!(top[1].frequency, 2);
        assert_eq!(top[2].frequency, 1);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let freq = compute_frequency_map(&["gamma", "alpha", "beta", "alpha", "gamma", "beta"]);
        let top = compute_top_n(&freq, 3);
        assert_eq!(ranked_words(&top), vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn truncates_to_n() {
        let tokens: Vec<String> = (0..25).map(|i| format!("w{i}")).collect();
        let freq = compute_frequency_map(&tokens);
        let top = compute_top_n(&freq, DEFAULT_TOP_N);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].word, "w0");
        assert_eq!(top[9].word, "w9");
    }

    #[test]
    fn frequencies_are_non_increasing() {
        let text = "a b c a b a d e f a b c g h i j k a";
        let freq = compute_frequency_map(&text.split(' ').collect::<Vec<_>>());
        let top = compute_top_n(&freq, 5);
        assert!(top.len() <= 5);
        assert!(top.windows(2).all(|w| w[0].frequency >= w[1].frequency));
    }
}
