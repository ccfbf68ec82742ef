use crate::AlertRule;
use chrono::{DateTime, Utc};
use thermon_common::types::{Alert, AlertLevel, Stats};

/// Which side of the safe band a threshold guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    High,
    Low,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl Boundary {
    /// Inclusive: a reading exactly on the line is a breach.
    fn breached(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::High => value >= threshold,
            Self::Low => value <= threshold,
        }
    }
}

/// Fires when the reading reaches `threshold` on the given side.
///
/// Critical rules describe the hard limit being crossed; warning rules
/// describe the reading approaching it.
pub struct ThresholdRule {
    pub id: String,
    pub level: AlertLevel,
    pub boundary: Boundary,
    pub threshold: f64,
}

impl ThresholdRule {
    fn message(&self, temperature: f64) -> String {
        match (self.level, self.boundary) {
            (AlertLevel::Critical, Boundary::High) => format!(
                "Temperature {temperature:.1}C exceeds high threshold {:.1}C",
                self.threshold
            ),
            (AlertLevel::Critical, Boundary::Low) => format!(
                "Temperature {temperature:.1}C below low threshold {:.1}C",
                self.threshold
            ),
            (AlertLevel::Warning, boundary) => format!(
                "Temperature {temperature:.1}C approaching {boundary} threshold (warning at {:.1}C)",
                self.threshold
            ),
        }
    }
}

impl AlertRule for ThresholdRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn level(&self) -> AlertLevel {
        self.level
    }

    fn evaluate(
        &self,
        temperature: f64,
        sensor_id: &str,
        _stats: &Stats,
        now: DateTime<Utc>,
    ) -> Option<Alert> {
        if !self.boundary.breached(temperature, self.threshold) {
            return None;
        }

        Some(Alert {
            level: self.level,
            message: self.message(temperature),
            temperature,
            threshold: self.threshold,
            sensor_id: sensor_id.to_string(),
            timestamp: now,
        })
    }
}
