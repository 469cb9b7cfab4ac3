//! Thermowatch - Main Entry Point
//!
//! Headless monitor loop: connects to the telemetry server and logs the
//! readings and status transitions a display layer would render.

use std::time::Duration;

use thermowatch::constants::PUMP_INTERVAL_MS;
use thermowatch::domain::config::AppConfig;
use thermowatch::services::{StreamMonitor, WsTransport};
use thermowatch::state::connection_state::StreamStatus;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default configuration");
        AppConfig::default()
    });

    tracing::info!(host = %config.host, port = config.port, "Starting thermowatch...");

    let period_ms = config.period_ms;
    let mut monitor = StreamMonitor::new(config, Box::new(WsTransport));
    if let Err(e) = monitor.start(period_ms) {
        tracing::error!(error = %e, "refusing to start stream");
        return;
    }

    let mut last_status = monitor.status();
    loop {
        std::thread::sleep(Duration::from_millis(PUMP_INTERVAL_MS));

        let applied = monitor.pump();

        let status = monitor.status();
        if status != last_status {
            tracing::info!(status = status.label(), "stream status changed");
            last_status = status;
        }

        if applied > 0 && status == StreamStatus::Connected {
            tracing::info!(
                temperature = monitor.current_value(),
                trend = monitor.trend().label(),
                window = monitor.chart().len(),
                readings = monitor.log().len(),
                "reading"
            );
        }

        // No automatic reconnect: a failed stream ends the run.
        if status == StreamStatus::Disconnected {
            tracing::info!("stream ended");
            break;
        }
    }
}
