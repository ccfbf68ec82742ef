//! Built-in alert rules and the default precedence chain.

pub mod threshold;
pub mod trend;

use crate::config::AnalyticsConfig;
use crate::stats::MIN_TREND_POINTS;
use crate::AlertRule;
use thermon_common::types::AlertLevel;
use threshold::{Boundary, ThresholdRule};
use trend::TrendRule;

/// Builds the rule chain for `config` in precedence order: hard limits,
/// then warning margins, then trend.
pub fn default_chain(config: &AnalyticsConfig) -> Vec<Box<dyn AlertRule>> {
    vec![
        Box::new(ThresholdRule {
            id: "temp-high-critical".into(),
            level: AlertLevel::Critical,
            boundary: Boundary::High,
            threshold: config.alert_temp_high,
        }),
        Box::new(ThresholdRule {
            id: "temp-low-critical".into(),
            level: AlertLevel::Critical,
            boundary: Boundary::Low,
            threshold: config.alert_temp_low,
        }),
        Box::new(ThresholdRule {
            id: "temp-high-warning".into(),
            level: AlertLevel::Warning,
            boundary: Boundary::High,
            threshold: config.high_warning_line(),
        }),
        Box::new(ThresholdRule {
            id: "temp-low-warning".into(),
            level: AlertLevel::Warning,
            boundary: Boundary::Low,
            threshold: config.low_warning_line(),
        }),
        Box::new(TrendRule {
            id: "temp-trend".into(),
            sensitivity: config.trend_sensitivity,
            min_count: MIN_TREND_POINTS,
        }),
    ]
}
