//! Log sinks: the receiving end of the bridge.
//!
//! A sink consumes one formatted [`LogRecord`] per call. This is the single
//! interface crossing toward a telemetry backend; exporters plug in by
//! implementing [`LogSink`].

use crate::record::LogRecord;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// A callback object that receives formatted log records for forwarding
/// to a telemetry backend.
///
/// Implementations must be cheap and non-blocking: delivery is synchronous
/// on the thread that emitted the event.
pub trait LogSink: Send + Sync {
    /// Consume one formatted log record
    fn consume(&self, record: LogRecord);

    /// Short name for startup logging and config validation
    fn name(&self) -> &'static str;
}

/// Sink that writes each record as one JSON line on stdout.
///
/// This is the default stand-in for a real exporter: a collector tailing
/// stdout sees exactly one record per line.
#[derive(Debug, Default, Clone)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StdoutSink {
    fn consume(&self, record: LogRecord) {
        // A record that fails to serialize is dropped; the fmt layer has
        // already written the human-readable line.
        if let Ok(line) = record.to_json_line() {
            let mut stdout = std::io::stdout().lock();
            let _ = writeln!(stdout, "{}", line);
        }
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Sink that buffers records in memory for later inspection.
///
/// Used by tests and by embedders that want to assert on emitted records.
/// Clones share the same buffer.
///
/// # Example
///
/// ```
/// use observability::{CaptureSink, LogRecord, LogSink};
///
/// let sink = CaptureSink::new();
/// sink.consume(LogRecord::new("WARN", "test", "hello"));
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Drain and return all captured records
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// True if any captured record's message contains `needle`
    pub fn contains_message(&self, needle: &str) -> bool {
        self.records.lock().iter().any(|r| r.message.contains(needle))
    }
}

impl LogSink for CaptureSink {
    fn consume(&self, record: LogRecord) {
        self.records.lock().push(record);
    }

    fn name(&self) -> &'static str {
        "capture"
    }
}

/// Sink that drops every record. Used when the bridge is disabled by
/// configuration but callers still want a sink object to hand around.
#[derive(Debug, Default, Clone)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NullSink {
    fn consume(&self, _record: LogRecord) {}

    fn name(&self) -> &'static str {
        "null"
    }
}
