//! Configuration validation.
//!
//! Validation never mutates the config: it collects errors (which prevent
//! startup) and warnings (which are surfaced but non-fatal) into a
//! [`ValidationReport`].

use crate::ServiceConfig;
use thiserror::Error;

const VALID_FORMATS: [&str; 3] = ["pretty", "json", "compact"];
const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_SINKS: [&str; 2] = ["stdout", "null"];

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid bridge sink: {0}. Must be one of: stdout, null")]
    InvalidBridgeSink(String),

    #[error("Invalid bridge level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidBridgeLevel(String),

    #[error("Unresolved environment variable in {field}: {value}")]
    UnresolvedEnvVar { field: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

pub fn validate_config(config: &ServiceConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if config.service.name.is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }

    if crate::has_unresolved_env_vars(&config.server.host) {
        report.add_error(ValidationError::UnresolvedEnvVar {
            field: "server.host".to_string(),
            value: config.server.host.clone(),
        });
    }

    let format = config.logging.format.to_lowercase();
    if !VALID_FORMATS.contains(&format.as_str()) {
        report.add_error(ValidationError::InvalidLogFormat(
            config.logging.format.clone(),
        ));
    }

    let level = config.logging.level.to_lowercase();
    if !VALID_LEVELS.contains(&level.as_str()) {
        report.add_error(ValidationError::InvalidLogLevel(
            config.logging.level.clone(),
        ));
    }

    let sink = config.bridge.sink.to_lowercase();
    if !VALID_SINKS.contains(&sink.as_str()) {
        report.add_error(ValidationError::InvalidBridgeSink(
            config.bridge.sink.clone(),
        ));
    }

    let bridge_level = config.bridge.min_level.to_lowercase();
    if !VALID_LEVELS.contains(&bridge_level.as_str()) {
        report.add_error(ValidationError::InvalidBridgeLevel(
            config.bridge.min_level.clone(),
        ));
    }

    if config.bridge.enabled && sink == "null" {
        report.add_warning(
            "bridge.sink",
            "Bridge is enabled but the null sink drops every record",
        );
    }

    if config.server.http_port == 0 {
        report.add_warning(
            "server.http_port",
            "Port 0 binds an ephemeral port; intended for tests only",
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_default_config;

    #[test]
    fn test_valid_config_passes() {
        let config = generate_default_config();
        let report = validate_config(&config);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_service_name_is_error() {
        let mut config = generate_default_config();
        config.service.name = String::new();

        let report = validate_config(&config);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_bad_format_and_level_are_errors() {
        let mut config = generate_default_config();
        config.logging.format = "xml".to_string();
        config.logging.level = "loud".to_string();

        let report = validate_config(&config);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_unknown_sink_is_error() {
        let mut config = generate_default_config();
        config.bridge.sink = "kafka".to_string();

        let report = validate_config(&config);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_enabled_null_sink_warns() {
        let mut config = generate_default_config();
        config.bridge.sink = "null".to_string();

        let report = validate_config(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "bridge.sink");
    }

    #[test]
    fn test_unresolved_env_var_is_error() {
        let mut config = generate_default_config();
        config.server.host = "${ROLLDICE_HOST}".to_string();

        let report = validate_config(&config);
        assert!(!report.is_valid());
    }
}
