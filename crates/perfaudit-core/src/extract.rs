//! Metric extraction from PageSpeed Insights payloads
//!
//! Pure functions that turn a raw PageSpeed Insights API response into a
//! [`MetricRecord`] and clamp the extracted values into sane bounds.

use crate::error::PerfAuditError;
use crate::record::{metric, MetricRecord};
use serde_json::Value;

/// Lighthouse audit key → metric name mapping.
const AUDIT_MAPPINGS: &[(&str, &str)] = &[
    ("first-contentful-paint", metric::FIRST_CONTENTFUL_PAINT),
    ("largest-contentful-paint", metric::LARGEST_CONTENTFUL_PAINT),
    ("total-blocking-time", metric::TOTAL_BLOCKING_TIME),
    ("cumulative-layout-shift", metric::CUMULATIVE_LAYOUT_SHIFT),
    ("speed-index", metric::SPEED_INDEX),
    ("interactive", metric::TIME_TO_INTERACTIVE),
];

/// Allowed (min, max) per metric. Values outside are clamped, unknown
/// metric names are dropped.
const BOUNDS: &[(&str, f64, f64)] = &[
    (metric::PERFORMANCE_SCORE, 0.0, 100.0),
    (metric::FIRST_CONTENTFUL_PAINT, 0.0, 60_000.0),
    (metric::LARGEST_CONTENTFUL_PAINT, 0.0, 60_000.0),
    (metric::TOTAL_BLOCKING_TIME, 0.0, 10_000.0),
    (metric::CUMULATIVE_LAYOUT_SHIFT, 0.0, 10.0),
    (metric::SPEED_INDEX, 0.0, 60_000.0),
    (metric::TIME_TO_INTERACTIVE, 0.0, 120_000.0),
];

/// Extract performance metrics from a PageSpeed Insights response.
///
/// The category score is rescaled from 0-1 to 0-100; audit numeric values
/// are already milliseconds (CLS is unitless). Anything missing from the
/// payload is simply absent from the record, never an error.
pub fn extract_from_pagespeed(response: &Value) -> MetricRecord {
    let mut record = MetricRecord::new();

    let lhr = match response.get("lighthouseResult") {
        Some(lhr) if lhr.get("categories").is_some() => lhr,
        _ => return record,
    };

    if let Some(score) = lhr
        .pointer("/categories/performance/score")
        .and_then(Value::as_f64)
    {
        record.insert(metric::PERFORMANCE_SCORE, score * 100.0);
    }

    for (audit_key, name) in AUDIT_MAPPINGS {
        let pointer = format!("/audits/{}/numericValue", audit_key);
        if let Some(value) = lhr.pointer(&pointer).and_then(Value::as_f64) {
            record.insert(*name, value);
        }
    }

    record
}

/// Parse a raw JSON payload and extract metrics from it.
pub fn extract_from_json(payload: &str) -> Result<MetricRecord, PerfAuditError> {
    let response: Value = serde_json::from_str(payload)
        .map_err(|e| PerfAuditError::ExtractError(e.to_string()))?;
    Ok(extract_from_pagespeed(&response))
}

/// Validate an extracted record against the bounds table.
pub fn validate(record: &MetricRecord) -> MetricRecord {
    let mut validated = MetricRecord::new();

    for (name, value) in record.iter() {
        let bounds = BOUNDS.iter().find(|(bounded, _, _)| *bounded == name);
        if let Some((_, min, max)) = bounds {
            validated.insert(name, value.clamp(*min, *max));
        }
    }

    validated
}
