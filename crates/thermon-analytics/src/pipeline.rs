//! Newline-delimited JSON transport around the analytics engine.
//!
//! Each input line is decoded into a [`ReadingRecord`], fed to the engine,
//! and answered with exactly one output line: an alert envelope when a rule
//! fired, a telemetry envelope otherwise. Lines that cannot be decoded or
//! that carry no temperature produce no output.

use anyhow::Result;
use serde_json::Value;
use std::future::Future;
use thermon_alert::clock::Clock;
use thermon_alert::AnalyticsEngine;
use thermon_common::envelope::{AlertEnvelope, Envelope, TelemetryEnvelope};
use thermon_common::types::{AlertLevel, ReadingRecord};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Blank,
    /// Not UTF-8, not a JSON object, or `temperature` is not a number.
    Invalid(String),
    MissingTemperature,
    Alert(AlertEnvelope),
    Telemetry(TelemetryEnvelope),
}

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: u64,
    pub invalid: u64,
    pub missing_temperature: u64,
    pub alerts: u64,
    pub telemetry: u64,
}

/// Decodes raw line bytes as UTF-8, then processes them.
pub fn handle_bytes<C: Clock>(engine: &mut AnalyticsEngine<C>, bytes: &[u8]) -> LineOutcome {
    match std::str::from_utf8(bytes) {
        Ok(line) => handle_line(engine, line),
        Err(e) => LineOutcome::Invalid(e.to_string()),
    }
}

/// Decodes and processes a single input line.
pub fn handle_line<C: Clock>(engine: &mut AnalyticsEngine<C>, line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let record: ReadingRecord = match serde_json::from_str::<Value>(line) {
        Ok(value @ Value::Object(_)) => match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => return LineOutcome::Invalid(e.to_string()),
        },
        Ok(_) => return LineOutcome::Invalid("expected a JSON object".to_string()),
        Err(e) => return LineOutcome::Invalid(e.to_string()),
    };

    let Some(temperature) = record.temperature else {
        return LineOutcome::MissingTemperature;
    };
    let sensor_id = record.sensor_id();

    let (alert, stats) = engine.process(temperature, sensor_id);
    match alert {
        Some(alert) => {
            match alert.level {
                AlertLevel::Critical => {
                    tracing::error!(sensor_id, "[{}] {}", alert.level.tag(), alert.message)
                }
                AlertLevel::Warning => {
                    tracing::warn!(sensor_id, "[{}] {}", alert.level.tag(), alert.message)
                }
            }
            LineOutcome::Alert(AlertEnvelope::new(alert, &stats))
        }
        None => LineOutcome::Telemetry(TelemetryEnvelope::new(
            sensor_id,
            temperature,
            engine.clock().now(),
            &stats,
        )),
    }
}

/// Reads lines from `reader` until EOF or until `shutdown` resolves, writing
/// one JSON document per processed reading to `writer`.
///
/// Lines are split on raw `\n` bytes so a badly encoded line is skipped
/// without ending the run.
pub async fn run<C, R, W, S>(
    engine: &mut AnalyticsEngine<C>,
    reader: R,
    mut writer: W,
    shutdown: S,
) -> Result<RunSummary>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    let mut segments = reader.split(b'\n');
    let mut summary = RunSummary::default();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            segment = segments.next_segment() => {
                let Some(segment) = segment? else {
                    tracing::debug!("Input closed");
                    break;
                };
                summary.lines += 1;

                let envelope = match handle_bytes(engine, &segment) {
                    LineOutcome::Blank => continue,
                    LineOutcome::Invalid(reason) => {
                        summary.invalid += 1;
                        tracing::warn!(line = summary.lines, error = %reason, "Invalid record, skipping");
                        continue;
                    }
                    LineOutcome::MissingTemperature => {
                        summary.missing_temperature += 1;
                        tracing::debug!(line = summary.lines, "Record has no temperature, skipping");
                        continue;
                    }
                    LineOutcome::Alert(envelope) => {
                        summary.alerts += 1;
                        Envelope::Alert(envelope)
                    }
                    LineOutcome::Telemetry(envelope) => {
                        summary.telemetry += 1;
                        Envelope::Telemetry(envelope)
                    }
                };

                let json = envelope.to_json()?;
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            _ = &mut shutdown => {
                tracing::info!("Shutting down gracefully");
                break;
            }
        }
    }

    writer.flush().await?;
    Ok(summary)
}
