//! Observation validation utilities

use std::fmt;

use crate::domain::range::{Bounds, IRRADIATION_MAX, IRRADIATION_MIN};

/// Observation validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationValidationError {
    /// A reading is NaN or infinite
    NotFinite { field: &'static str },
    /// Irradiation outside the slider domain
    IrradiationOutOfRange { value: f64, min: f64, max: f64 },
    /// Temperature outside the bounds of the current light condition
    TemperatureOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
        condition: &'static str,
    },
}

impl ObservationValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field } => field,
            Self::IrradiationOutOfRange { .. } => "irradiation",
            Self::TemperatureOutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for ObservationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "{} must be a finite number", field),
            Self::IrradiationOutOfRange { value, min, max } => {
                write!(
                    f,
                    "Invalid irradiation {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::TemperatureOutOfRange {
                field,
                value,
                min,
                max,
                condition,
            } => {
                write!(
                    f,
                    "Invalid {} {}: must be between {} and {} for {}",
                    field, value, min, max, condition
                )
            }
        }
    }
}

impl std::error::Error for ObservationValidationError {}

pub fn validate_finite(field: &'static str, value: f64) -> Result<(), ObservationValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ObservationValidationError::NotFinite { field })
    }
}

pub fn validate_irradiation(value: f64) -> Result<(), ObservationValidationError> {
    validate_finite("irradiation", value)?;

    if !(IRRADIATION_MIN..=IRRADIATION_MAX).contains(&value) {
        return Err(ObservationValidationError::IrradiationOutOfRange {
            value,
            min: IRRADIATION_MIN,
            max: IRRADIATION_MAX,
        });
    }

    Ok(())
}

pub fn validate_temperature(
    field: &'static str,
    value: f64,
    bounds: &Bounds,
    condition: &'static str,
) -> Result<(), ObservationValidationError> {
    validate_finite(field, value)?;

    if !bounds.contains(value) {
        return Err(ObservationValidationError::TemperatureOutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
            condition,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irradiation_limits() {
        assert!(validate_irradiation(0.0).is_ok());
        assert!(validate_irradiation(1.2).is_ok());
        assert!(matches!(
            validate_irradiation(1.25),
            Err(ObservationValidationError::IrradiationOutOfRange { .. })
        ));
        assert!(matches!(
            validate_irradiation(-0.1),
            Err(ObservationValidationError::IrradiationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_non_finite_readings_rejected() {
        assert_eq!(
            validate_irradiation(f64::NAN),
            Err(ObservationValidationError::NotFinite {
                field: "irradiation"
            })
        );

        let bounds = Bounds::new(15.0, 35.0, 20.0);
        assert!(validate_temperature("module_temp", f64::INFINITY, &bounds, "Night").is_err());
    }

    #[test]
    fn test_temperature_error_message() {
        let bounds = Bounds::new(15.0, 35.0, 20.0);
        let err = validate_temperature("module_temp", 40.0, &bounds, "Night").unwrap_err();

        assert_eq!(err.field(), "module_temp");
        assert_eq!(
            err.to_string(),
            "Invalid module_temp 40: must be between 15 and 35 for Night"
        );
    }
}
