//! Loading, saving, and generating configuration files.

use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    debug!("Config file content length: {} bytes", content.len());

    // Perform environment variable substitution
    let substituted = substitution::substitute_env_vars(&content)?;
    debug!("Environment variable substitution completed");

    // Parse YAML
    let config: ServiceConfig = serde_yaml::from_str(&substituted)
        .with_context(|| "Failed to parse YAML configuration")?;

    info!("Configuration loaded successfully");
    Ok(config)
}

#[instrument]
pub fn generate_default_config() -> ServiceConfig {
    ServiceConfig {
        service: ServiceSection {
            name: "rolldice".to_string(),
            instance: defaults::default_instance(),
        },
        server: ServerSection::default(),
        logging: LoggingSection::default(),
        bridge: BridgeSection::default(),
        metrics: Some(MetricsSection {
            enabled: false,
            port: defaults::default_metrics_port(),
        }),
    }
}

#[instrument]
pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(config: &ServiceConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = generate_default_config();
        let report = validate_config(&config);
        assert!(report.is_valid(), "default config should validate");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rolldice.yaml");

        let config = generate_default_config();
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.service.name, config.service.name);
        assert_eq!(loaded.server.http_port, config.server.http_port);
        assert_eq!(loaded.bridge.sink, config.bridge.sink);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_config("/nonexistent/rolldice.yaml");
        assert!(result.is_err());
    }
}
