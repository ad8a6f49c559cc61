//! Solar Power Predictor
//!
//! A single-page dashboard that predicts AC power output from three
//! environmental readings:
//! - Irradiation-driven slider ranges for module and ambient temperature
//! - A fitted scaler, polynomial expander and linear model loaded at startup
//! - Non-negative power predictions with a model-scope disclaimer

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::artifacts::load_pipeline;
use tracing::{error, info};

/// Create the application state, loading every artifact up front.
///
/// Fails when any artifact is missing, corrupt or inconsistent; the process
/// cannot serve predictions without them.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(
        scaler = %config.artifacts.scaler_path,
        expander = %config.artifacts.expander_path,
        model = %config.artifacts.model_path,
        "Loading model artifacts"
    );

    let pipeline = load_pipeline(&config.artifacts).map_err(|e| {
        error!(error = %e, "Failed to load model artifacts");
        anyhow::anyhow!("Failed to load model artifacts: {}", e)
    })?;

    Ok(AppState::new(pipeline))
}
