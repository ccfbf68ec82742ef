use crate::AlertRule;
use chrono::{DateTime, Utc};
use thermon_common::types::{Alert, AlertLevel, Stats};

/// Warns on a rapid rise or fall across the window.
///
/// The trend itself comes from [`crate::stats::compute`]; this rule only
/// checks its magnitude once the window holds `min_count` readings.
pub struct TrendRule {
    pub id: String,
    pub sensitivity: f64,
    pub min_count: usize,
}

impl AlertRule for TrendRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn level(&self) -> AlertLevel {
        AlertLevel::Warning
    }

    fn evaluate(
        &self,
        temperature: f64,
        sensor_id: &str,
        stats: &Stats,
        now: DateTime<Utc>,
    ) -> Option<Alert> {
        let fires = stats.count >= self.min_count && stats.trend.abs() >= self.sensitivity;
        if !fires {
            return None;
        }

        let direction = if stats.trend > 0.0 { "rising" } else { "falling" };

        Some(Alert {
            level: AlertLevel::Warning,
            message: format!(
                "Rapid temperature {direction}: trend={:+.2}C over last {} readings",
                stats.trend, stats.count,
            ),
            temperature,
            threshold: self.sensitivity,
            sensor_id: sensor_id.to_string(),
            timestamp: now,
        })
    }
}
