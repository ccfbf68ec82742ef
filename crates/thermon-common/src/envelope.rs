//! JSON envelopes written by the transport for each processed reading.
//!
//! A reading that raised an alert is reported with an [`AlertEnvelope`];
//! every other reading is reported with a [`TelemetryEnvelope`]. Both carry
//! the same [`StatsPayload`], with floating-point statistics rounded to two
//! decimals.

use crate::types::{Alert, AlertLevel, Stats};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Value of the `type` field on telemetry envelopes.
pub const TELEMETRY_TYPE: &str = "telemetry_stats";

/// Round to two decimal places.
///
/// # Examples
///
/// ```
/// use thermon_common::envelope::round2;
///
/// assert_eq!(round2(22.456), 22.46);
/// assert_eq!(round2(-0.004), 0.0);
/// ```
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid emitting "-0.0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    pub mean: f64,
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
    pub trend: f64,
    pub window_size: usize,
}

impl From<&Stats> for StatsPayload {
    fn from(stats: &Stats) -> Self {
        Self {
            mean: round2(stats.mean),
            stdev: round2(stats.stdev),
            min: round2(stats.min),
            max: round2(stats.max),
            trend: round2(stats.trend),
            window_size: stats.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEnvelope {
    pub alert_level: AlertLevel,
    pub message: String,
    pub temperature: f64,
    pub threshold: f64,
    pub sensor_id: String,
    pub timestamp: DateTime<Utc>,
    pub stats: StatsPayload,
}

impl AlertEnvelope {
    pub fn new(alert: Alert, stats: &Stats) -> Self {
        Self {
            alert_level: alert.level,
            message: alert.message,
            temperature: alert.temperature,
            threshold: alert.threshold,
            sensor_id: alert.sensor_id,
            timestamp: alert.timestamp,
            stats: StatsPayload::from(stats),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sensor_id: String,
    pub latest_temperature: f64,
    pub timestamp: DateTime<Utc>,
    pub stats: StatsPayload,
}

impl TelemetryEnvelope {
    pub fn new(
        sensor_id: impl Into<String>,
        latest_temperature: f64,
        timestamp: DateTime<Utc>,
        stats: &Stats,
    ) -> Self {
        Self {
            kind: TELEMETRY_TYPE,
            sensor_id: sensor_id.into(),
            latest_temperature,
            timestamp,
            stats: StatsPayload::from(stats),
        }
    }
}

/// Either envelope, serialized without an outer tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Alert(AlertEnvelope),
    Telemetry(TelemetryEnvelope),
}

impl Envelope {
    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
