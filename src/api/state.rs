//! Application state shared by every handler

use std::sync::Arc;

use crate::domain::PredictionPipeline;

/// Application state. The pipeline is loaded once at startup and only ever
/// read afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PredictionPipeline>,
}

impl AppState {
    pub fn new(pipeline: PredictionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
