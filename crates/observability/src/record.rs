//! The transient log record handed across the sink boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single formatted log record.
///
/// This is the only data that crosses from the logging facade into a sink:
/// the rendered message plus the event's metadata and remaining key/value
/// fields. Records are transient — they live for one delivery and are not
/// buffered anywhere except by [`CaptureSink`](crate::sink::CaptureSink).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// RFC 3339 UTC timestamp taken when the event was bridged
    pub timestamp: String,
    /// Severity level name (e.g. "WARN")
    pub level: String,
    /// Module path / target of the emitting event
    pub target: String,
    /// The rendered `message` field of the event
    pub message: String,
    /// Remaining event fields, in field-name order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogRecord {
    /// Create a record with the current timestamp and no extra fields
    pub fn new(
        level: impl Into<String>,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level: level.into(),
            target: target.into(),
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Render the record as one JSON line
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_line() {
        let record = LogRecord::new("WARN", "dice::api", "alice is rolling the dice: 4")
            .with_field("player", serde_json::json!("alice"));

        let line = record.to_json_line().unwrap();
        assert!(line.contains("\"level\":\"WARN\""));
        assert!(line.contains("alice is rolling the dice: 4"));
        assert!(line.contains("\"player\":\"alice\""));
        // One line, no embedded newlines
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_empty_fields_omitted() {
        let record = LogRecord::new("INFO", "test", "hello");
        let line = record.to_json_line().unwrap();
        assert!(!line.contains("fields"));
    }
}
