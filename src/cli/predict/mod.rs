//! Predict command - one prediction from the command line

use clap::Args;

use crate::domain::{ObservationInput, Presentation};

/// Arguments for the predict command
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Irradiation in kW/m² (0.0 - 1.2)
    #[arg(long)]
    pub irradiation: f64,

    /// Module temperature in °C (defaults to the light condition's default)
    #[arg(long)]
    pub module_temp: Option<f64>,

    /// Ambient temperature in °C (defaults to the light condition's default)
    #[arg(long)]
    pub ambient_temp: Option<f64>,
}

impl PredictArgs {
    pub fn observation(&self) -> anyhow::Result<ObservationInput> {
        let defaults = ObservationInput::with_defaults(self.irradiation)?;

        Ok(ObservationInput::new(
            self.irradiation,
            self.module_temp.unwrap_or(defaults.module_temp),
            self.ambient_temp.unwrap_or(defaults.ambient_temp),
        )?)
    }
}

/// Load the artifacts, predict once and print the result
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config)?;

    let input = args.observation()?;
    let result = state.pipeline.predict_observation(&input)?;

    println!("{}", Presentation::new(&result, state.pipeline.model_name()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_temperatures_use_condition_defaults() {
        let args = PredictArgs {
            irradiation: 0.9,
            module_temp: None,
            ambient_temp: Some(30.0),
        };

        let input = args.observation().unwrap();
        assert_eq!(input.module_temp, 60.0);
        assert_eq!(input.ambient_temp, 30.0);
    }

    #[test]
    fn test_invalid_readings_are_errors() {
        let args = PredictArgs {
            irradiation: 0.0,
            module_temp: Some(50.0),
            ambient_temp: None,
        };

        assert!(args.observation().is_err());
    }
}
