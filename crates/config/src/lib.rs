//! Configuration for the rolldice service.
//!
//! Configuration is a single YAML document with four sections: `service`,
//! `server`, `logging`, and `bridge` (plus an optional `metrics` section).
//! Values may reference environment variables with `${VAR}` placeholders,
//! which are substituted at load time.

use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use parser::{generate_default_config, load_config, save_config};
pub use substitution::{has_unresolved_env_vars, substitute_env_vars};
pub use validator::{validate_config, ValidationError, ValidationReport};

use defaults::*;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub service: ServiceSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub bridge: BridgeSection,
    #[serde(default)]
    pub metrics: Option<MetricsSection>,
}

/// Service identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSection {
    pub name: String,
    /// Instance identifier for multi-instance deployments
    #[serde(default = "default_instance")]
    pub instance: String,
}

/// HTTP server binding.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSection {
    /// Default level filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: pretty, json, or compact
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Log-record bridge settings.
///
/// When enabled, every record admitted by the log filter is also delivered
/// to the configured sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sink kind: stdout or null
    #[serde(default = "default_sink")]
    pub sink: String,
    /// Most verbose level delivered to the sink
    #[serde(default = "default_bridge_level")]
    pub min_level: String,
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sink: default_sink(),
            min_level: default_bridge_level(),
        }
    }
}

/// Prometheus metrics listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsSection {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let yaml = "service:\n  name: rolldice\n";
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.service.name, "rolldice");
        assert_eq!(config.service.instance, "instance-1");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.bridge.enabled);
        assert_eq!(config.bridge.sink, "stdout");
        assert_eq!(config.bridge.min_level, "trace");
        assert!(config.metrics.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let yaml = r#"
service:
  name: rolldice
  instance: instance-2
server:
  host: 127.0.0.1
  http_port: 3000
logging:
  level: debug
  format: json
bridge:
  enabled: false
  sink: "null"
  min_level: warn
metrics:
  enabled: true
  port: 9091
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.service.instance, "instance-2");
        assert_eq!(config.server.http_port, 3000);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.bridge.enabled);
        assert_eq!(config.bridge.sink, "null");
        assert_eq!(config.metrics.unwrap().port, 9091);
    }
}
