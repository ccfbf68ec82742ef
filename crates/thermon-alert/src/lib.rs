//! Rolling-window analytics engine for temperature readings.
//!
//! The [`engine::AnalyticsEngine`] keeps a bounded FIFO window of recent
//! readings, recomputes [`Stats`] over it on every call, and runs an ordered
//! chain of [`AlertRule`]s against the newest reading. The first rule that
//! fires wins. Built-in rule types are hard/soft thresholds and short-term
//! trend.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod stats;
pub mod window;


use chrono::{DateTime, Utc};
use thermon_common::types::{Alert, AlertLevel, Stats};

pub use config::AnalyticsConfig;
pub use engine::AnalyticsEngine;
pub use error::ConfigError;

/// An alert rule evaluated against the newest reading and the statistics of
/// the window that now contains it.
///
/// The engine holds its rules in precedence order and stops at the first
/// one that returns an alert.
pub trait AlertRule: Send + Sync {
    /// Unique identifier for this rule instance (e.g., `"temp-high-critical"`).
    fn id(&self) -> &str;

    /// The level assigned to alerts produced by this rule.
    fn level(&self) -> AlertLevel;

    /// Returns an alert if the rule condition is met, or `None` otherwise.
    fn evaluate(
        &self,
        temperature: f64,
        sensor_id: &str,
        stats: &Stats,
        now: DateTime<Utc>,
    ) -> Option<Alert>;
}
