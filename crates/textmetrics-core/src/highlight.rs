//! Search-term highlighting.
//!
//! Finds every case-insensitive occurrence of a search term and wraps it in a
//! pair of markers. The term is matched literally: characters such as `.`,
//! `*` or `(` have no special meaning. Matches never overlap and are found
//! left to right.
//!
//! HTML markers escape `&`, `<`, `>` and `"` in the surrounding text, so the
//! result is always well-formed markup.
//!
//! ```
//! use textmetrics_core::highlight::{Marker, highlight_occurrences};
//!
//! let marked = highlight_occurrences("The cat sat", "the", &Marker::html()).unwrap();
//! assert_eq!(marked, r#"<span class="highlight">The</span> cat sat"#);
//! ```

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Default opening marker (HTML).
pub const DEFAULT_OPEN: &str = r#"<span class="highlight">"#;

/// Default closing marker (HTML).
pub const DEFAULT_CLOSE: &str = "</span>";

/// Strings inserted around each match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Inserted before each match.
    pub open: String,
    /// Inserted after each match.
    pub close: String,
    /// Escape HTML special characters in the text between markers.
    #[serde(default)]
    pub escape_html: bool,
}

impl Marker {
    /// Create a plain-text marker from an opening and closing string.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            escape_html: false,
        }
    }

    /// Create an HTML marker. The text it wraps is escaped on render.
    pub fn html_tags(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            escape_html: true,
            ..Self::new(open, close)
        }
    }

    /// `<span class="highlight">` ... `</span>`.
    pub fn html() -> Self {
        Self::html_tags(DEFAULT_OPEN, DEFAULT_CLOSE)
    }

    /// `[` ... `]`.
    pub fn brackets() -> Self {
        Self::new("[", "]")
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::html()
    }
}

/// Byte range of one match within the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// A piece of the searched text, either between matches or inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any match.
    Plain(&'a str),
    /// Matched text.
    Match(&'a str),
}

/// All occurrences of a search term within a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    text: &'a str,
    matches: Vec<MatchSpan>,
}

impl<'a> Highlight<'a> {
    /// The searched text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Match spans in ascending order.
    pub fn matches(&self) -> &[MatchSpan] {
        &self.matches
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the term never occurs.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Split the text into alternating plain and matched segments.
    ///
    /// Empty plain segments (between adjacent matches, or at either end) are
    /// skipped.
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let mut segments = Vec::with_capacity(self.matches.len() * 2 + 1);
        let mut last = 0;
        for span in &self.matches {
            if span.start > last {
                segments.push(Segment::Plain(&self.text[last..span.start]));
            }
            segments.push(Segment::Match(&self.text[span.start..span.end]));
            last = span.end;
        }
        if last < self.text.len() {
            segments.push(Segment::Plain(&self.text[last..]));
        }
        segments
    }

    /// Render the text with every match wrapped in `marker`.
    pub fn render(&self, marker: &Marker) -> String {
        let extra = self.matches.len() * (marker.open.len() + marker.close.len());
        let mut out = String::with_capacity(self.text.len() + extra);
        let push = |out: &mut String, s: &str| {
            if marker.escape_html {
                push_html_escaped(out, s);
            } else {
                out.push_str(s);
            }
        };
        for segment in self.segments() {
            match segment {
                Segment::Plain(s) => push(&mut out, s),
                Segment::Match(s) => {
                    out.push_str(&marker.open);
                    push(&mut out, s);
                    out.push_str(&marker.close);
                }
            }
        }
        out
    }
}

fn push_html_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Find every case-insensitive occurrence of `needle` in `text`.
///
/// Surrounding whitespace is trimmed from `needle` first.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptySearchTerm`] if the trimmed needle is empty.
/// Returns [`AnalysisError::InvalidSearchTerm`] if the term is too large to
/// compile into a matcher.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn find_occurrences<'a>(text: &'a str, needle: &str) -> AnalysisResult<Highlight<'a>> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Err(AnalysisError::EmptySearchTerm);
    }

    let pattern = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|e| AnalysisError::InvalidSearchTerm(e.to_string()))?;

    let matches: Vec<MatchSpan> = pattern
        .find_iter(text)
        .map(|m| MatchSpan {
            start: m.start(),
            end: m.end(),
        })
        .collect();
    tracing::debug!(matches = matches.len(), "search complete");

    Ok(Highlight { text, matches })
}

/// Wrap every case-insensitive occurrence of `needle` in `text` with `marker`.
///
/// # Errors
///
/// See [`find_occurrences`].
pub fn highlight_occurrences(text: &str, needle: &str, marker: &Marker) -> AnalysisResult<String> {
    Ok(find_occurrences(text, needle)?.render(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_case_insensitive_match_only() {
        let out = highlight_occurrences("The cat sat", "the", &Marker::html()).unwrap();
        assert_eq!(out, r#"<span class="highlight">The</span> cat sat"#);
    }

    #[test]
    fn global_matching() {
        let out = highlight_occurrences("the THE tHe", "the", &Marker::brackets()).unwrap();
        assert_eq!(out, "[the] [THE] [tHe]");
    }

    #[test]
    fn substring_matches_inside_words() {
        let out = highlight_occurrences("Then other", "the", &Marker::brackets()).unwrap();
        assert_eq!(out, "[The]n o[the]r");
    }

    #[test]
    fn no_match_returns_text_unchanged() {
        let found = find_occurrences("The cat sat", "dog").unwrap();
        assert!(found.is_empty());
        assert_eq!(found.render(&Marker::html()), "The cat sat");
    }

    #[test]
    fn empty_needle_is_rejected() {
        assert_eq!(
            find_occurrences("text", "").unwrap_err(),
            AnalysisError::EmptySearchTerm
        );
        assert_eq!(
            find_occurrences("text", "   ").unwrap_err(),
            AnalysisError::EmptySearchTerm
        );
    }

    #[test]
    fn needle_is_trimmed() {
        let found = find_occurrences("a cat", "  cat ").unwrap();
        assert_eq!(found.matches(), &[MatchSpan { start: 2, end: 5 }]);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let out = highlight_occurrences("a.b axb (x) a+", "a.b", &Marker::brackets()).unwrap();
        assert_eq!(out, "[a.b] axb (x) a+");

        let out = highlight_occurrences("f(x) = (y", "(", &Marker::brackets()).unwrap();
        assert_eq!(out, "f[(]x) = [(]y");

        let out = highlight_occurrences("1+1 11", "1+1", &Marker::brackets()).unwrap();
        assert_eq!(out, "[1+1] 11");
    }

    #[test]
    fn matches_do_not_overlap() {
        let found = find_occurrences("aaaa", "aa").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn segments_alternate_plain_and_match() {
        let found = find_occurrences("cat and cat", "cat").unwrap();
        assert_eq!(
            found.segments(),
            vec![
                Segment::Match("cat"),
                Segment::Plain(" and "),
                Segment::Match("cat"),
            ]
        );
    }

    #[test]
    fn unicode_case_folding() {
        let out = highlight_occurrences("Ärger und ärger", "ÄRGER", &Marker::brackets()).unwrap();
        assert_eq!(out, "[Ärger] und [ärger]");
    }

    #[test]
    fn html_marker_escapes_text() {
        let out = highlight_occurrences("a<b", "<", &Marker::html()).unwrap();
        assert_eq!(out, r#"a<span class="highlight">&lt;</span>b"#);

        let out = highlight_occurrences(r#"<b>x</b> & "the""#, "the", &Marker::html()).unwrap();
        assert_eq!(
            out,
            r#"&lt;b&gt;x&lt;/b&gt; &amp; &quot;<span class="highlight">the</span>&quot;"#
        );
    }

    #[test]
    fn plain_marker_leaves_text_alone() {
        let out = highlight_occurrences("a<b & c", "<", &Marker::brackets()).unwrap();
        assert_eq!(out, "a[<]b & c");
    }

    #[test]
    fn custom_marker() {
        let marker = Marker::new("**", "**");
        let out = highlight_occurrences("one two", "two", &marker).unwrap();
        assert_eq!(out, "one **two**");
    }
}
