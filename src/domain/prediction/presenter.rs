//! Display text for a finished prediction

use std::fmt;

use serde::Serialize;

use super::result::PredictionResult;

pub const POWER_UNIT: &str = "kW";

pub const MODEL_SCOPE_DISCLAIMER: &str = "Model Scope: This model was trained on data from a \
specific, hot, sunny climate. The dynamic temperature ranges are based on the real data from \
that location. The model would not be accurate for a different climate (e.g., a cold or snowy \
region) as it was never trained on that type of data.";

/// What the dashboard shows after a successful prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub headline: String,
    pub disclaimer: &'static str,
    pub footer: String,
    /// Positive output earns the celebration effect on the dashboard
    pub celebrate: bool,
}

impl Presentation {
    pub fn new(result: &PredictionResult, model_name: &str) -> Self {
        Self {
            headline: format_power(result.clamped_value),
            disclaimer: MODEL_SCOPE_DISCLAIMER,
            footer: model_name.to_string(),
            celebrate: result.clamped_value > 0.0,
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f)?;
        writeln!(f, "{}", self.disclaimer)?;
        writeln!(f, "---")?;
        write!(f, "{}", self.footer)
    }
}

pub fn format_power(value: f64) -> String {
    format!("Predicted AC Power Output: {:.2} {}", value, POWER_UNIT)
}
