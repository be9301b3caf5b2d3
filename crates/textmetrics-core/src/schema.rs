//! JSON Schemas for the machine-readable output of each analysis.
//!
//! Consumers of `--json` output can validate against these instead of
//! tracking the field layout by hand.

use schemars::{Schema, schema_for};

use crate::density::KeywordDensity;
use crate::metrics::TextMetrics;
use crate::ranking::TopEntry;
use crate::report::TextReport;

/// An output shape with a published JSON Schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputKind {
    /// A single [`TextMetrics`] object.
    Stats,
    /// An array of [`KeywordDensity`] entries.
    Density,
    /// An array of [`TopEntry`] entries.
    Top,
    /// A full [`TextReport`].
    Analyze,
}

impl OutputKind {
    /// Every output kind, in command order.
    pub const ALL: [Self; 4] = [Self::Stats, Self::Density, Self::Top, Self::Analyze];

    /// Returns the output kind as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Density => "density",
            Self::Top => "top",
            Self::Analyze => "analyze",
        }
    }

    /// Generate the JSON Schema for this output.
    pub fn json_schema(self) -> Schema {
        match self {
            Self::Stats => schema_for!(TextMetrics),
            Self::Density => schema_for!(Vec<KeywordDensity>),
            Self::Top => schema_for!(Vec<TopEntry>),
            Self::Analyze => schema_for!(TextReport),
        }
    }
}
