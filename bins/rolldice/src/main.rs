//! rolldice CLI and server binary
//!
//! This is the main entry point for the rolldice service. It provides
//! commands for initializing, validating, and serving with a configuration
//! file. On `serve`, every log record admitted by the filter is also
//! delivered to the configured sink through the bridge layer.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config, ServiceConfig};
use dice::api::{dice_routes, DiceApiState};
use observability::{
    init_default_logging, init_logging_with_bridge, init_metrics, BridgeLayer, LogFormat, LogSink,
    NullSink, StdoutSink,
};
use server::{health_routes, HealthState, HttpServer, ServerConfig, ServerExt};
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Serve {
            config,
            port,
            log_format,
        } => serve(config, port, log_format).await,
        Commands::Validate { config } => validate_command(config),
        Commands::Init { output } => init_command(output),
    }
}

/// Build the sink the bridge delivers to, per the config.
fn build_sink(config: &ServiceConfig) -> Arc<dyn LogSink> {
    if !config.bridge.enabled || config.bridge.sink.eq_ignore_ascii_case("null") {
        Arc::new(NullSink::new())
    } else {
        Arc::new(StdoutSink::new())
    }
}

async fn serve<P: AsRef<Path>>(
    config_path: P,
    port_override: Option<u16>,
    format_override: Option<String>,
) -> Result<()> {
    let config = load_config(&config_path)?;
    let report = validate_config(&config);

    // Resolve logging before anything is logged: CLI override wins over config
    let format_str = format_override.unwrap_or_else(|| config.logging.format.clone());
    let format: LogFormat = format_str
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // The config level applies only when RUST_LOG doesn't already say otherwise
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.logging.level);
    }

    let min_level: tracing::Level = config
        .bridge
        .min_level
        .parse()
        .with_context(|| format!("invalid bridge level: {}", config.bridge.min_level))?;

    let sink = build_sink(&config);
    let bridge = BridgeLayer::new(sink).with_max_level(min_level);
    init_logging_with_bridge(&config.service.name, format, bridge)?;

    // Surface validation results now that logging is up
    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "Configuration warning");
    }
    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start service due to configuration errors");
    }

    if let Some(metrics) = &config.metrics {
        if metrics.enabled {
            init_metrics(metrics.port)?;
        }
    }

    let http_port = port_override.unwrap_or(config.server.http_port);

    info!(
        service = %config.service.name,
        instance = %config.service.instance,
        host = %config.server.host,
        http_port,
        "Starting rolldice service"
    );

    let state = Arc::new(DiceApiState::new(&config.service.name));
    let health = Arc::new(HealthState::new(&config.service.name));

    let router = dice_routes(state)
        .merge(health_routes(health))
        .layer(TraceLayer::new_for_http());

    let server_config = ServerConfig::new(&config.server.host, http_port);
    let server = HttpServer::new(server_config, router);

    server.run_with_ctrl_c().await?;

    info!("Service stopped");
    Ok(())
}

fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    init_default_logging("rolldice")?;

    let config_path = config_path.as_ref();
    let config = load_config(config_path)?;
    let report = validate_config(&config);

    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "Configuration warning");
    }

    if report.is_valid() {
        info!(path = ?config_path, "Configuration is valid");
        Ok(())
    } else {
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Configuration is invalid ({} errors)", report.errors.len());
    }
}

fn init_command<P: AsRef<Path>>(output: P) -> Result<()> {
    init_default_logging("rolldice")?;

    let output = output.as_ref();
    if output.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {:?}", output);
    }

    let config = generate_default_config();
    save_config(&config, output)
        .with_context(|| format!("Failed to write default config to {:?}", output))?;

    info!(path = ?output, "Default configuration written");
    Ok(())
}
