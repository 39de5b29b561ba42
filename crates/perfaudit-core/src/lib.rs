//! PerfAudit Core: Metric Records and Ingest Utilities
//!
//! Shared data model for the PerfAudit pipeline: the flat metric record
//! evaluated by the rules engine, extraction of metrics from PageSpeed
//! Insights payloads, and streaming aggregation of real-user samples.

pub mod error;
pub mod extract;
pub mod record;
pub mod rum;

pub use error::PerfAuditError;
pub use extract::{extract_from_json, extract_from_pagespeed, validate};
pub use record::{metric, MetricRecord};
pub use rum::{MetricWindow, RumAggregator};

/// Engine version
pub const PERFAUDIT_VERSION: &str = "1.0.0";
