use serde::Serialize;

/// Output of one pipeline run, before and after the non-negativity clamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub raw_value: f64,
    pub clamped_value: f64,
}

impl PredictionResult {
    pub fn from_raw(raw_value: f64) -> Self {
        Self {
            raw_value,
            clamped_value: clamp_power(raw_value),
        }
    }

    pub fn was_clamped(&self) -> bool {
        self.raw_value < self.clamped_value
    }
}

/// Power output cannot be negative; the linear model may still extrapolate
/// below zero, so only the final value is clamped.
pub fn clamp_power(raw: f64) -> f64 {
    raw.max(0.0)
}
