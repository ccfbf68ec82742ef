//! Standalone analytics service: reads readings as newline-delimited JSON on
//! stdin and writes alert or telemetry envelopes to stdout.

pub mod config;
pub mod pipeline;
