//! Metric records
//!
//! A metric record is a flat map of named numeric performance metrics for
//! one evaluation subject: a single synthetic audit or one aggregated
//! real-user window. Records are built once and read-only for the duration
//! of an evaluation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metric name vocabulary.
///
/// Rules and budgets reference metrics by these names. Synthetic audits use
/// the long names; real-user beacons report the short Core Web Vitals names
/// (see [`crate::rum`]).
pub mod metric {
    /// Lighthouse performance category score, 0-100.
    pub const PERFORMANCE_SCORE: &str = "performance_score";
    /// Largest Contentful Paint, milliseconds.
    pub const LARGEST_CONTENTFUL_PAINT: &str = "largest_contentful_paint";
    /// First Input Delay, milliseconds.
    pub const FIRST_INPUT_DELAY: &str = "first_input_delay";
    /// Cumulative Layout Shift, unitless.
    pub const CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative_layout_shift";
    /// First Contentful Paint, milliseconds.
    pub const FIRST_CONTENTFUL_PAINT: &str = "first_contentful_paint";
    /// Time to First Byte, milliseconds.
    pub const TIME_TO_FIRST_BYTE: &str = "time_to_first_byte";
    /// Total Blocking Time, milliseconds.
    pub const TOTAL_BLOCKING_TIME: &str = "total_blocking_time";
    /// Speed Index, milliseconds.
    pub const SPEED_INDEX: &str = "speed_index";
    /// Time to Interactive, milliseconds.
    pub const TIME_TO_INTERACTIVE: &str = "time_to_interactive";
}

/// A set of named metric values for one evaluation subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricRecord {
    values: HashMap<String, f64>,
}

impl MetricRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric (builder style)
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Add or replace a metric
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Look up a metric value
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether the record carries this metric
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of metrics in the record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over metric names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for MetricRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
