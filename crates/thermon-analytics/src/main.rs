use anyhow::Result;
use thermon_alert::AnalyticsEngine;
use thermon_analytics::config::ServiceConfig;
use thermon_analytics::pipeline;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[allow(clippy::print_stderr)]
fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  thermon-analytics [config.toml]    Read readings from stdin, write envelopes to stdout");
    eprintln!();
    eprintln!("Environment overrides:");
    eprintln!("  ALERT_TEMP_HIGH, ALERT_TEMP_LOW, WARNING_MARGIN, ROLLING_WINDOW_SIZE, TREND_SENSITIVITY");
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the data stream, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("thermon=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        config_path => run_standalone(config_path).await,
    }
}

async fn run_standalone(config_path: Option<&str>) -> Result<()> {
    let config = ServiceConfig::resolve(config_path)?;
    let mut engine = AnalyticsEngine::new(config.analytics)?;

    let analytics = engine.config();
    tracing::info!(
        low = analytics.alert_temp_low,
        high = analytics.alert_temp_high,
        warning_margin = analytics.warning_margin,
        window = analytics.rolling_window_size,
        trend_sensitivity = analytics.trend_sensitivity,
        "thermon-analytics starting in standalone mode"
    );

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let summary = pipeline::run(
        &mut engine,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        shutdown,
    )
    .await?;

    tracing::info!(
        processed = engine.total_processed(),
        alerts = engine.total_alerts(),
        invalid = summary.invalid,
        skipped = summary.missing_temperature,
        "Stopped"
    );

    Ok(())
}
