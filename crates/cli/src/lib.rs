use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolldice")]
#[command(about = "rolldice - a dice-roll web service with a log-record bridge")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the service with the given configuration
    Serve {
        /// Path to the configuration file
        #[arg(short, long, default_value = "rolldice.yaml")]
        config: PathBuf,

        /// Override HTTP port
        #[arg(long)]
        port: Option<u16>,

        /// Override log format (pretty, json, compact)
        #[arg(long)]
        log_format: Option<String>,
    },

    /// Validate configuration without starting the service
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "rolldice.yaml")]
        config: PathBuf,
    },

    /// Initialize a new configuration file with defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "rolldice.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["rolldice", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { config, port, log_format } => {
                assert_eq!(config, PathBuf::from("rolldice.yaml"));
                assert_eq!(port, None);
                assert_eq!(log_format, None);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "rolldice", "serve", "--port", "3000", "--log-format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { port, log_format, .. } => {
                assert_eq!(port, Some(3000));
                assert_eq!(log_format.as_deref(), Some("json"));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_init_output_path() {
        let cli = Cli::try_parse_from(["rolldice", "init", "-o", "custom.yaml"]).unwrap();
        match cli.command {
            Commands::Init { output } => assert_eq!(output, PathBuf::from("custom.yaml")),
            _ => panic!("expected init command"),
        }
    }
}
