//! Observability infrastructure for the rolldice service
//!
//! This crate provides:
//! - Structured logging via tracing
//! - A bridge layer that intercepts log records and forwards them to a sink
//! - Prometheus metrics
//!
//! The bridge is the boundary toward any telemetry exporter: it hands each
//! formatted record to a [`LogSink`], one record per call. What happens on
//! the far side of the sink (export protocols, batching, retries) is out of
//! scope for this crate.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use observability::{init_logging_with_bridge, BridgeLayer, LogFormat, StdoutSink};
//!
//! let bridge = BridgeLayer::new(Arc::new(StdoutSink::new()));
//! init_logging_with_bridge("rolldice", LogFormat::Pretty, bridge)?;
//!
//! tracing::warn!("alice is rolling the dice: 4");
//! ```

pub mod bridge;
pub mod logging;
pub mod metrics;
pub mod record;
pub mod sink;

pub use bridge::BridgeLayer;
pub use logging::{init_default_logging, init_logging, init_logging_with_bridge, LogFormat};
pub use metrics::{init_metrics, DiceMetrics};
pub use record::LogRecord;
pub use sink::{CaptureSink, LogSink, NullSink, StdoutSink};
