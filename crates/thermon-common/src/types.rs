use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sensor identifier used when an input record carries no `sensorId`.
pub const UNKNOWN_SENSOR: &str = "unknown";

/// Alert severity level, ordered from lowest to highest.
///
/// A reading that trips no rule produces no alert at all, so there is no
/// "none" level.
///
/// # Examples
///
/// ```
/// use thermon_common::types::AlertLevel;
///
/// let level: AlertLevel = "warning".parse().unwrap();
/// assert_eq!(level, AlertLevel::Warning);
/// assert_eq!(level.to_string(), "warning");
/// assert!(AlertLevel::Critical > AlertLevel::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Critical,
}

impl AlertLevel {
    /// Upper-case tag used in log lines (e.g. `CRITICAL`).
    pub fn tag(&self) -> &'static str {
        match self {
            AlertLevel::Warning => "WARNING",
            AlertLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Warning => write!(f, "warning"),
            AlertLevel::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for AlertLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(AlertLevel::Warning),
            "critical" => Ok(AlertLevel::Critical),
            _ => Err(format!("unknown alert level: {s}")),
        }
    }
}

/// An alert raised for a single reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    /// The reading that triggered the alert.
    pub temperature: f64,
    /// The line that was crossed: a hard threshold, a warning line, or the
    /// trend sensitivity.
    pub threshold: f64,
    pub sensor_id: String,
    /// Captured when the rules were evaluated.
    pub timestamp: DateTime<Utc>,
}

/// Summary statistics over the current rolling window.
///
/// All fields are zero for an empty window. `stdev` is the sample standard
/// deviation and stays zero below two readings; `trend` stays zero below four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
    /// Positive when rising, negative when falling.
    pub trend: f64,
}

/// One decoded input record.
///
/// `temperature` stays optional because records without it are skipped by
/// the transport, never handed to the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadingRecord {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default, rename = "sensorId")]
    pub sensor_id: Option<String>,
}

impl ReadingRecord {
    pub fn sensor_id(&self) -> &str {
        self.sensor_id.as_deref().unwrap_or(UNKNOWN_SENSOR)
    }
}
