use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Readings at or above this value are critical.
    #[serde(default = "default_alert_temp_high")]
    pub alert_temp_high: f64,
    /// Readings at or below this value are critical.
    #[serde(default = "default_alert_temp_low")]
    pub alert_temp_low: f64,
    /// Degrees inside either hard threshold where a warning is raised.
    #[serde(default = "default_warning_margin")]
    pub warning_margin: f64,
    #[serde(default = "default_rolling_window_size")]
    pub rolling_window_size: usize,
    /// Minimum absolute trend (degrees) that raises a warning.
    #[serde(default = "default_trend_sensitivity")]
    pub trend_sensitivity: f64,
}

fn default_alert_temp_high() -> f64 {
    35.0
}

fn default_alert_temp_low() -> f64 {
    -10.0
}

fn default_warning_margin() -> f64 {
    5.0
}

fn default_rolling_window_size() -> usize {
    10
}

fn default_trend_sensitivity() -> f64 {
    0.5
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            alert_temp_high: default_alert_temp_high(),
            alert_temp_low: default_alert_temp_low(),
            warning_margin: default_warning_margin(),
            rolling_window_size: default_rolling_window_size(),
            trend_sensitivity: default_trend_sensitivity(),
        }
    }
}

impl AnalyticsConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("alert_temp_high", self.alert_temp_high),
            ("alert_temp_low", self.alert_temp_low),
            ("warning_margin", self.warning_margin),
            ("trend_sensitivity", self.trend_sensitivity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if self.alert_temp_low >= self.alert_temp_high {
            return Err(ConfigError::InvertedThresholds {
                low: self.alert_temp_low,
                high: self.alert_temp_high,
            });
        }
        if self.warning_margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.warning_margin));
        }
        if self.rolling_window_size == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.trend_sensitivity < 0.0 {
            return Err(ConfigError::NegativeSensitivity(self.trend_sensitivity));
        }
        Ok(())
    }

    /// Warning line below the high threshold.
    pub fn high_warning_line(&self) -> f64 {
        self.alert_temp_high - self.warning_margin
    }

    /// Warning line above the low threshold.
    pub fn low_warning_line(&self) -> f64 {
        self.alert_temp_low + self.warning_margin
    }
}
