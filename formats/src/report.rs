//! Record of what a conversion kept, dropped and filled.

use chrono::{DateTime, Utc};
use hueport_core::GroupFill;
use serde::{Deserialize, Serialize};

use crate::adapter::TextFormat;
use crate::error::Result;

/// Fallback group that filled absent canonical colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackFill {
    pub group: String,
    pub filled: usize,
}

impl From<GroupFill> for FallbackFill {
    fn from(fill: GroupFill) -> Self {
        Self {
            group: fill.group.to_string(),
            filled: fill.filled,
        }
    }
}

/// Outcome of one conversion. Paths are dotted field paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Reader format name.
    pub reader: String,
    /// Writer format name.
    pub writer: String,
    pub converted_at: DateTime<Utc>,
    /// Source fields with no canonical counterpart.
    pub dropped_source: Vec<String>,
    /// Canonical fields the writer has no place for.
    pub unused_canonical: Vec<String>,
    /// Writer fields with no canonical counterpart.
    pub unmapped_destination: Vec<String>,
    /// Writer leaves still absent after mapping.
    pub absent_destination: Vec<String>,
    pub fallback_fills: Vec<FallbackFill>,
}

impl ConversionReport {
    /// Empty report stamped with the current time.
    pub fn new(reader: &str, writer: &str) -> Self {
        Self {
            reader: reader.to_string(),
            writer: writer.to_string(),
            converted_at: Utc::now(),
            dropped_source: Vec::new(),
            unused_canonical: Vec::new(),
            unmapped_destination: Vec::new(),
            absent_destination: Vec::new(),
            fallback_fills: Vec::new(),
        }
    }

    /// No field on either side was left without a counterpart.
    pub fn is_lossless(&self) -> bool {
        self.dropped_source.is_empty() && self.unmapped_destination.is_empty()
    }

    /// Total number of colors filled from fallback groups.
    pub fn filled_count(&self) -> usize {
        self.fallback_fills.iter().map(|fill| fill.filled).sum()
    }

    /// Renders the report as JSON or YAML.
    pub fn render(&self, format: TextFormat) -> Result<String> {
        format.encode(self)
    }
}
