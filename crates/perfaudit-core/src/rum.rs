//! Real-user metric aggregation
//!
//! Streaming aggregation of RUM beacons for one (url, window): running mean
//! and observed maximum per metric, plus a page-view counter. Raw samples
//! are not retained; percentile math beyond this is out of scope.

use crate::record::MetricRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metric names reported by the RUM beacon script.
pub const RUM_METRICS: [&str; 5] = ["lcp", "fid", "cls", "fcp", "ttfb"];

/// Running aggregate for one metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricWindow {
    /// Running mean over all samples
    pub mean: f64,
    /// Largest observed value
    pub max: f64,
    /// Number of samples folded in
    pub samples: u64,
}

/// Streaming aggregator for real-user samples on one URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RumAggregator {
    url: String,
    page_views: u64,
    windows: HashMap<String, MetricWindow>,
}

impl RumAggregator {
    /// Create an aggregator for a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            page_views: 0,
            windows: HashMap::new(),
        }
    }

    /// The URL this aggregator covers
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Page views folded in so far
    pub fn page_views(&self) -> u64 {
        self.page_views
    }

    /// Fold one beacon into the window.
    ///
    /// Only the known RUM metrics are aggregated; a beacon is free to omit
    /// any of them (FID in particular only arrives after an interaction).
    pub fn sample(&mut self, beacon: &MetricRecord) {
        self.page_views += 1;

        for name in RUM_METRICS {
            let value = match beacon.get(name) {
                Some(value) => value,
                None => continue,
            };

            let window = self.windows.entry(name.to_string()).or_default();
            window.samples += 1;
            window.mean += (value - window.mean) / window.samples as f64;
            if window.samples == 1 || value > window.max {
                window.max = value;
            }
        }
    }

    /// Running aggregate for one metric, if any samples carried it
    pub fn window(&self, name: &str) -> Option<&MetricWindow> {
        self.windows.get(name)
    }

    /// Snapshot of the running means, ready for rule evaluation
    pub fn to_record(&self) -> MetricRecord {
        self.windows
            .iter()
            .map(|(name, window)| (name.clone(), window.mean))
            .collect()
    }

    /// Snapshot of the observed maxima
    pub fn max_record(&self) -> MetricRecord {
        self.windows
            .iter()
            .map(|(name, window)| (name.clone(), window.max))
            .collect()
    }
}
