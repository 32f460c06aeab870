//! Prometheus metrics infrastructure
//!
//! This module provides utilities for initializing Prometheus metrics
//! and creating service-specific metric sets.

use metrics::{counter, histogram, Counter, Histogram};
use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize the Prometheus metrics exporter
///
/// This starts an HTTP server on the specified port that exposes metrics
/// at the `/metrics` endpoint.
///
/// # Arguments
///
/// * `port` - Port to expose metrics on
///
/// # Example
///
/// ```ignore
/// observability::metrics::init_metrics(9090)?;
/// // Metrics available at http://localhost:9090/metrics
/// ```
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    tracing::info!(%addr, "Metrics server listening");
    Ok(())
}

/// Dice-service metrics
///
/// # Metrics
///
/// * `dice_rolls_total` - Total number of rolls served
/// * `dice_rolls_by_result` - Rolls broken down by face value
/// * `dice_roll_duration_seconds` - Request duration histogram
///
/// # Example
///
/// ```ignore
/// let metrics = DiceMetrics::new("rolldice");
///
/// // Record a roll of 4 that took 2ms to serve
/// metrics.record_roll(4, Duration::from_millis(2));
/// ```
#[derive(Clone)]
pub struct DiceMetrics {
    rolls_total: Counter,
    rolls_by_result: fn(u8) -> Counter,
    roll_duration: Histogram,
    service_name: String,
}

impl DiceMetrics {
    /// Create metrics for a service instance
    pub fn new(service_name: &str) -> Self {
        let name = service_name.to_string();

        Self {
            rolls_total: counter!("dice_rolls_total", "service" => name.clone()),
            rolls_by_result: |result| {
                counter!("dice_rolls_by_result", "result" => result.to_string())
            },
            roll_duration: histogram!("dice_roll_duration_seconds", "service" => name.clone()),
            service_name: name,
        }
    }

    /// Record a completed roll
    ///
    /// # Arguments
    ///
    /// * `result` - The face value rolled (1..=6)
    /// * `duration` - How long the request took
    pub fn record_roll(&self, result: u8, duration: Duration) {
        self.rolls_total.increment(1);
        (self.rolls_by_result)(result).increment(1);
        self.roll_duration.record(duration.as_secs_f64());
    }

    /// Get the service name
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
