//! Token frequency counting.

use std::collections::HashMap;

/// Occurrence counts for distinct tokens.
///
/// Tokens are compared exactly (case and punctuation matter). Besides the
/// counts, the map remembers the order in which each distinct token was first
/// seen, so iteration is deterministic and ranking ties can be broken by first
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    /// Distinct tokens paired with their counts, in first-seen order.
    entries: Vec<(String, usize)>,
    /// Position of each token in `entries`.
    index: HashMap<String, usize>,
    /// Sum of all counts.
    total: usize,
}

impl FrequencyMap {
    /// Create an empty frequency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        if let Some(&pos) = self.index.get(token) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(token.to_string(), self.entries.len());
            self.entries.push((token.to_string(), 1));
        }
        self.total += 1;
    }

    /// Occurrence count of `token`, or `None` if it never appeared.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no token has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded occurrences across all tokens.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Iterate over `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = Self::new();
        for token in iter {
            map.record(token);
        }
        map
    }
}

/// Count occurrences of each token in a single pass.
///
/// No stop-word filtering and no normalization.
pub fn compute_frequency_map<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    tokens.iter().map(AsRef::as_ref).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tokens() {
        let freq = compute_frequency_map::<&str>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn counts_each_token() {
        let freq = compute_frequency_map(&["a", "b", "a", "c", "a", "b"]);
        assert_eq!(freq.get("a"), Some(3));
        assert_eq!(freq.get("b"), Some(2));
        assert_eq!(freq.get("c"), Some(1));
        assert_eq!(freq.get("d"), None);
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn case_and_punctuation_are_significant() {
        let freq = compute_frequency_map(&["The", "the", "the.", "the"]);
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get("the"), Some(2));
        assert_eq!(freq.get("The"), Some(1));
        assert_eq!(freq.get("the."), Some(1));
    }

    #[test]
    fn iterates_in_first_seen_order() {
        let freq = compute_frequency_map(&["zeta", "alpha", "zeta", "mid"]);
        let order: Vec<_> = freq.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let tokens = vec!["x".to_string(), "x".to_string()];
        let freq = compute_frequency_map(&tokens);
        assert_eq!(freq.get("x"), Some(2));
    }
}
