use anyhow::{Context, Result};
use serde::Deserialize;
use thermon_alert::AnalyticsConfig;

pub const ENV_ALERT_TEMP_HIGH: &str = "ALERT_TEMP_HIGH";
pub const ENV_ALERT_TEMP_LOW: &str = "ALERT_TEMP_LOW";
pub const ENV_WARNING_MARGIN: &str = "WARNING_MARGIN";
pub const ENV_ROLLING_WINDOW_SIZE: &str = "ROLLING_WINDOW_SIZE";
pub const ENV_TREND_SENSITIVITY: &str = "TREND_SENSITIVITY";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl ServiceConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{path}'"))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{path}'"))?;
        Ok(config)
    }

    /// Loads the optional config file, then applies process environment
    /// overrides on top.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overrides analytics fields from `lookup`. Unset keys keep the current
    /// value; set keys that fail to parse are an error.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let analytics = &mut self.analytics;
        if let Some(v) = parse_var(&lookup, ENV_ALERT_TEMP_HIGH)? {
            analytics.alert_temp_high = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ALERT_TEMP_LOW)? {
            analytics.alert_temp_low = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_WARNING_MARGIN)? {
            analytics.warning_margin = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ROLLING_WINDOW_SIZE)? {
            analytics.rolling_window_size = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_TREND_SENSITIVITY)? {
            analytics.trend_sensitivity = v;
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid value for {key}: '{raw}'"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_replace_defaults() {
        let mut config = ServiceConfig::default();
        config
            .apply_env(lookup_from(&[
                ("ALERT_TEMP_HIGH", "30"),
                ("ALERT_TEMP_LOW", " -20.5 "),
                ("ROLLING_WINDOW_SIZE", "5"),
            ]))
            .unwrap();

        assert_eq!(config.analytics.alert_temp_high, 30.0);
        assert_eq!(config.analytics.alert_temp_low, -20.5);
        assert_eq!(config.analytics.rolling_window_size, 5);
        assert_eq!(config.analytics.warning_margin, 5.0);
        assert_eq!(config.analytics.trend_sensitivity, 0.5);
    }

    #[test]
    fn optional_overrides_for_margin_and_sensitivity() {
        let mut config = ServiceConfig::default();
        config
            .apply_env(lookup_from(&[
                ("WARNING_MARGIN", "2.5"),
                ("TREND_SENSITIVITY", "1"),
            ]))
            .unwrap();
        assert_eq!(config.analytics.warning_margin, 2.5);
        assert_eq!(config.analytics.trend_sensitivity, 1.0);
    }

    #[test]
    fn unparsable_override_names_the_key() {
        let mut config = ServiceConfig::default();
        let err = config
            .apply_env(lookup_from(&[("ROLLING_WINDOW_SIZE", "ten")]))
            .unwrap_err();
        assert!(err.to_string().contains("ROLLING_WINDOW_SIZE"));
    }

    #[test]
    fn load_reads_analytics_table_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[analytics]\nalert_temp_high = 40.0\nrolling_window_size = 20"
        )
        .unwrap();

        let config = ServiceConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.analytics.alert_temp_high, 40.0);
        assert_eq!(config.analytics.rolling_window_size, 20);
        assert_eq!(config.analytics.alert_temp_low, -10.0);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ServiceConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ServiceConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
