//! Observation domain - the three environmental readings a prediction runs on

mod validation;

pub use validation::{
    validate_finite, validate_irradiation, validate_temperature, ObservationValidationError,
};

use serde::{Deserialize, Serialize};

use crate::domain::range::{select_range, RangeProfile};

/// One set of readings: irradiation (kW/m²), module and ambient temperature (°C).
///
/// The temperatures are only meaningful inside the bounds that
/// [`select_range`] yields for the irradiation; [`ObservationInput::new`]
/// enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationInput {
    pub irradiation: f64,
    pub module_temp: f64,
    pub ambient_temp: f64,
}

impl ObservationInput {
    pub fn new(
        irradiation: f64,
        module_temp: f64,
        ambient_temp: f64,
    ) -> Result<Self, ObservationValidationError> {
        let input = Self {
            irradiation,
            module_temp,
            ambient_temp,
        };
        input.validate()?;
        Ok(input)
    }

    /// Readings with both temperatures reset to the defaults of the
    /// irradiation's light condition.
    pub fn with_defaults(irradiation: f64) -> Result<Self, ObservationValidationError> {
        validate_irradiation(irradiation)?;
        let profile = select_range(irradiation);

        Ok(Self {
            irradiation,
            module_temp: profile.module_temp.default,
            ambient_temp: profile.ambient_temp.default,
        })
    }

    pub fn validate(&self) -> Result<(), ObservationValidationError> {
        validate_irradiation(self.irradiation)?;

        let profile = self.profile();
        validate_temperature(
            "module_temp",
            self.module_temp,
            &profile.module_temp,
            profile.label,
        )?;
        validate_temperature(
            "ambient_temp",
            self.ambient_temp,
            &profile.ambient_temp,
            profile.label,
        )?;

        Ok(())
    }

    pub fn profile(&self) -> RangeProfile {
        select_range(self.irradiation)
    }

    /// Feature row in training order
    pub fn features(&self) -> [f64; 3] {
        [self.irradiation, self.module_temp, self.ambient_temp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_observation() {
        let input = ObservationInput::new(0.6, 50.0, 30.0).unwrap();
        assert_eq!(input.features(), [0.6, 50.0, 30.0]);
        assert_eq!(input.profile().label, "Medium Light / Sunny");
    }

    #[test]
    fn test_temperature_outside_condition_rejected() {
        // 60°C is fine in bright sun but too hot for an overcast module
        assert!(ObservationInput::new(0.8, 60.0, 32.0).is_ok());

        let err = ObservationInput::new(0.2, 60.0, 32.0).unwrap_err();
        assert_eq!(err.field(), "module_temp");
    }

    #[test]
    fn test_irradiation_change_invalidates_previous_temperatures() {
        let sunny = ObservationInput::new(0.6, 60.0, 35.0).unwrap();

        let night = ObservationInput {
            irradiation: 0.0,
            ..sunny
        };
        assert!(night.validate().is_err());

        let reset = ObservationInput::with_defaults(0.0).unwrap();
        assert_eq!(reset.module_temp, 20.0);
        assert_eq!(reset.ambient_temp, 20.0);
        assert!(reset.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_json() {
        let input: ObservationInput = serde_json::from_str(
            r#"{"irradiation": 0.0, "module_temp": 20.0, "ambient_temp": 20.0}"#,
        )
        .unwrap();

        assert_eq!(input, ObservationInput::with_defaults(0.0).unwrap());
    }
}
