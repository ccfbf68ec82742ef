use crate::clock::{Clock, SystemClock};
use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::rules;
use crate::stats;
use crate::window::RollingWindow;
use crate::AlertRule;
use thermon_common::types::{Alert, Stats};

/// Stateful analytics for one stream of readings.
///
/// `process` takes `&mut self`: callers feeding one engine from several
/// tasks must serialize access themselves (one engine per sensor, or an
/// external mutex).
pub struct AnalyticsEngine<C: Clock = SystemClock> {
    config: AnalyticsConfig,
    rules: Vec<Box<dyn AlertRule>>,
    window: RollingWindow,
    clock: C,
    total_processed: u64,
    total_alerts: u64,
}

impl AnalyticsEngine<SystemClock> {
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for AnalyticsEngine<SystemClock> {
    fn default() -> Self {
        let config = AnalyticsConfig::default();
        Self {
            rules: rules::default_chain(&config),
            window: RollingWindow::new(config.rolling_window_size),
            config,
            clock: SystemClock,
            total_processed: 0,
            total_alerts: 0,
        }
    }
}

impl<C: Clock> AnalyticsEngine<C> {
    /// Validates `config` and builds an engine that stamps alerts with `clock`.
    pub fn with_clock(config: AnalyticsConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: rules::default_chain(&config),
            window: RollingWindow::new(config.rolling_window_size),
            config,
            clock,
            total_processed: 0,
            total_alerts: 0,
        })
    }

    /// Processes one reading and returns the alert it raised, if any,
    /// together with the statistics of the window after the append.
    ///
    /// Non-finite readings never enter the window, so they cannot poison the
    /// statistics of later readings. An infinite reading is still classified
    /// against the hard thresholds; NaN is counted and otherwise ignored.
    pub fn process(&mut self, temperature: f64, sensor_id: &str) -> (Option<Alert>, Stats) {
        self.total_processed += 1;

        if temperature.is_nan() {
            tracing::warn!(sensor_id, "Ignoring NaN reading");
            return (None, stats::compute(self.window.as_slice()));
        }

        if temperature.is_finite() {
            self.window.push(temperature);
        } else {
            tracing::warn!(sensor_id, temperature, "Infinite reading kept out of the window");
        }
        let stats = stats::compute(self.window.as_slice());

        let now = self.clock.now();
        let alert = self.rules.iter().find_map(|rule| {
            let alert = rule.evaluate(temperature, sensor_id, &stats, now)?;
            tracing::debug!(rule_id = rule.id(), level = %alert.level, sensor_id, "Rule fired");
            Some(alert)
        });

        if alert.is_some() {
            self.total_alerts += 1;
        }

        (alert, stats)
    }

    pub fn total_processed(&self) -> u64 {
        self.total_processed
    }

    pub fn total_alerts(&self) -> u64 {
        self.total_alerts
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn rules(&self) -> &[Box<dyn AlertRule>] {
        &self.rules
    }

    /// Number of readings currently held in the window.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
