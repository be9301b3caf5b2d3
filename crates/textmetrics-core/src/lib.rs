//! Core library for textmetrics.
//!
//! This crate turns a text into word, character, line and unique-word counts,
//! a reading time estimate, a keyword density table and a top-N frequency
//! ranking. It also highlights occurrences of a search term. Every function is
//! a pure transformation of its input; nothing is cached between calls.
//!
//! # Modules
//!
//! - [`text`] - Tokenization, character and line counting
//! - [`metrics`] - Counts and reading time
//! - [`frequency`] - Token frequency map
//! - [`density`] - Keyword density table
//! - [`ranking`] - Top-N most frequent words
//! - [`highlight`] - Search-term highlighting
//! - [`report`] - Full report combining all of the above
//! - [`schema`] - JSON Schemas for the report types
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textmetrics_core::{AnalysisOptions, analyze};
//!
//! let report = analyze("the cat sat on the mat", &AnalysisOptions::default()).unwrap();
//! assert_eq!(report.metrics.word_count, 6);
//! assert_eq!(report.top_words[0].word, "the");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod density;
pub mod error;
pub mod frequency;
pub mod highlight;
pub mod metrics;
pub mod ranking;
pub mod report;
pub mod schema;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use density::{KeywordDensity, compute_keyword_density};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::{FrequencyMap, compute_frequency_map};
pub use highlight::{Highlight, Marker, find_occurrences, highlight_occurrences};
pub use metrics::{ReadingTime, TextMetrics, compute_metrics, compute_metrics_with_speed};
pub use ranking::{TopEntry, compute_top_n};
pub use report::{AnalysisOptions, TextReport, analyze};
pub use schema::OutputKind;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
