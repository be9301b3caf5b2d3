//! Text processing utilities.
//!
//! Provides tokenization, character counting and line counting for use by
//! the metric modules.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a line break, absorbing any carriage returns directly before it.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r*\n").expect("valid regex"));

/// Split text into tokens on runs of whitespace.
///
/// Leading and trailing whitespace is ignored, so empty or all-whitespace
/// input yields no tokens at all. Tokens keep their case and punctuation:
/// `"Hello,"` and `"hello"` are different tokens.
///
/// Whitespace is Unicode `White_Space`: U+0085 separates tokens, U+FEFF
/// does not.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count characters as Unicode scalar values, whitespace included.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Count lines as `\n`-delimited segments.
///
/// Carriage returns directly before a newline belong to the line break, so
/// `\r\n` counts once. Input without a newline is a single line, and a
/// trailing newline opens an empty final line.
pub fn count_lines(text: &str) -> usize {
    LINE_BREAK.find_iter(text).count() + 1
}
