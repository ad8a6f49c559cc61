//! CLI module for the solar power predictor
//!
//! Provides subcommands for running the predictor in different modes:
//! - `serve`: API + dashboard combined (default deployment)
//! - `api`: API server only
//! - `predict`: one-shot prediction printed to stdout
//! - `ranges`: slider bounds for an irradiation reading

pub mod api;
pub mod predict;
pub mod ranges;
pub mod serve;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Solar power prediction dashboard
#[derive(Parser)]
#[command(name = "solar-power-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + dashboard combined
    Serve,

    /// Run API server only
    Api,

    /// Predict power output for one set of readings
    Predict(predict::PredictArgs),

    /// Show the temperature slider ranges for an irradiation reading
    Ranges(ranges::RangesArgs),
}

/// Read `.env`, load layered configuration and start logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

pub(crate) fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict_command() {
        let cli = Cli::try_parse_from([
            "solar-power-predictor",
            "predict",
            "--irradiation",
            "0.6",
            "--module-temp",
            "50",
            "--ambient-temp",
            "30",
        ])
        .unwrap();

        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.irradiation, 0.6);
                assert_eq!(args.module_temp, Some(50.0));
                assert_eq!(args.ambient_temp, Some(30.0));
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn test_build_socket_addr() {
        let addr = build_socket_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr.port(), 8080);

        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(build_socket_addr(&config).is_err());
    }
}
