/// Reasons an [`AnalyticsConfig`](crate::config::AnalyticsConfig) is rejected
/// at engine construction.
///
/// # Examples
///
/// ```rust
/// use thermon_alert::error::ConfigError;
///
/// let err = ConfigError::InvertedThresholds { low: 40.0, high: 35.0 };
/// assert!(err.to_string().contains("alert_temp_low"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("Config: {field} must be a finite number")]
    NonFinite { field: &'static str },

    /// The low threshold is not strictly below the high threshold.
    #[error("Config: alert_temp_low ({low}) must be below alert_temp_high ({high})")]
    InvertedThresholds { low: f64, high: f64 },

    #[error("Config: warning_margin must not be negative (got {0})")]
    NegativeMargin(f64),

    #[error("Config: rolling_window_size must be at least 1")]
    EmptyWindow,

    #[error("Config: trend_sensitivity must not be negative (got {0})")]
    NegativeSensitivity(f64),
}

/// Convenience `Result` alias for config validation.
pub type Result<T> = std::result::Result<T, ConfigError>;
