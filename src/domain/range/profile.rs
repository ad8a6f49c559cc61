//! Light conditions and the temperature bounds each one allows

use serde::Serialize;

/// Lower bound of the irradiation slider (kW/m²)
pub const IRRADIATION_MIN: f64 = 0.0;
/// Upper bound of the irradiation slider (kW/m²)
pub const IRRADIATION_MAX: f64 = 1.2;
pub const IRRADIATION_STEP: f64 = 0.05;
pub const IRRADIATION_DEFAULT: f64 = 0.6;

/// Step of both temperature sliders (°C)
pub const TEMPERATURE_STEP: f64 = 0.5;

/// Upper irradiation bound (inclusive) of the low-light band
const LOW_LIGHT_MAX: f64 = 0.3;
/// Upper irradiation bound (inclusive) of the medium-light band
const MEDIUM_LIGHT_MAX: f64 = 0.7;

/// Inclusive slider bounds with the value the slider resets to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Lighting band an irradiation reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightCondition {
    Night,
    LowLight,
    MediumLight,
    HighLight,
}

impl LightCondition {
    pub const ALL: [LightCondition; 4] = [
        Self::Night,
        Self::LowLight,
        Self::MediumLight,
        Self::HighLight,
    ];

    /// Classify an irradiation reading. Band upper bounds are inclusive and
    /// only an exact zero counts as night.
    pub fn from_irradiation(irradiation: f64) -> Self {
        if irradiation == 0.0 {
            Self::Night
        } else if irradiation <= LOW_LIGHT_MAX {
            Self::LowLight
        } else if irradiation <= MEDIUM_LIGHT_MAX {
            Self::MediumLight
        } else {
            Self::HighLight
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::LowLight => "Low Light / Overcast",
            Self::MediumLight => "Medium Light / Sunny",
            Self::HighLight => "High Light / Bright Sun",
        }
    }

    pub fn module_temp(&self) -> Bounds {
        match self {
            Self::Night => Bounds::new(15.0, 35.0, 20.0),
            Self::LowLight => Bounds::new(18.0, 49.0, 30.0),
            Self::MediumLight => Bounds::new(27.0, 63.0, 50.0),
            // 70°C is the hottest module reading in the training data
            Self::HighLight => Bounds::new(39.0, 70.0, 60.0),
        }
    }

    pub fn ambient_temp(&self) -> Bounds {
        match self {
            Self::Night => Bounds::new(15.0, 30.0, 20.0),
            Self::LowLight => Bounds::new(20.0, 40.0, 25.0),
            Self::MediumLight => Bounds::new(23.0, 39.0, 30.0),
            Self::HighLight => Bounds::new(25.0, 40.0, 32.0),
        }
    }

    pub fn profile(&self) -> RangeProfile {
        RangeProfile {
            condition: *self,
            label: self.label(),
            module_temp: self.module_temp(),
            ambient_temp: self.ambient_temp(),
        }
    }
}

impl std::fmt::Display for LightCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bounds and defaults of the two temperature sliders for one light condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeProfile {
    pub condition: LightCondition,
    pub label: &'static str,
    pub module_temp: Bounds,
    pub ambient_temp: Bounds,
}

/// Map an irradiation reading to the slider bounds of its light condition.
///
/// Pure lookup; callers re-render the dependent sliders whenever the
/// returned profile changes.
pub fn select_range(irradiation: f64) -> RangeProfile {
    LightCondition::from_irradiation(irradiation).profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_profile() {
        let profile = select_range(0.0);

        assert_eq!(profile.condition, LightCondition::Night);
        assert_eq!(profile.label, "Night");
        assert_eq!(profile.module_temp, Bounds::new(15.0, 35.0, 20.0));
        assert_eq!(profile.ambient_temp, Bounds::new(15.0, 30.0, 20.0));
    }

    #[test]
    fn test_low_light_profile_just_above_zero_and_at_upper_bound() {
        for irradiation in [0.05, 0.3] {
            let profile = select_range(irradiation);

            assert_eq!(profile.label, "Low Light / Overcast");
            assert_eq!(profile.module_temp, Bounds::new(18.0, 49.0, 30.0));
            assert_eq!(profile.ambient_temp, Bounds::new(20.0, 40.0, 25.0));
        }
    }

    #[test]
    fn test_medium_light_profile() {
        for irradiation in [0.35, 0.6, 0.7] {
            let profile = select_range(irradiation);

            assert_eq!(profile.label, "Medium Light / Sunny");
            assert_eq!(profile.module_temp, Bounds::new(27.0, 63.0, 50.0));
            assert_eq!(profile.ambient_temp, Bounds::new(23.0, 39.0, 30.0));
        }
    }

    #[test]
    fn test_high_light_profile() {
        for irradiation in [0.75, 1.0, 1.2] {
            let profile = select_range(irradiation);

            assert_eq!(profile.label, "High Light / Bright Sun");
            assert_eq!(profile.module_temp, Bounds::new(39.0, 70.0, 60.0));
            assert_eq!(profile.ambient_temp, Bounds::new(25.0, 40.0, 32.0));
        }
    }

    #[test]
    fn test_bounds_jump_across_thresholds() {
        assert_eq!(select_range(0.3).module_temp.max, 49.0);
        assert_eq!(select_range(0.35).module_temp.max, 63.0);

        assert_eq!(select_range(0.7).module_temp.min, 27.0);
        assert_eq!(select_range(0.75).module_temp.min, 39.0);
    }

    #[test]
    fn test_defaults_lie_within_bounds() {
        for condition in LightCondition::ALL {
            let module = condition.module_temp();
            let ambient = condition.ambient_temp();

            assert!(module.contains(module.default), "{condition}");
            assert!(ambient.contains(ambient.default), "{condition}");
        }
    }

    #[test]
    fn test_every_slider_step_maps_to_a_condition() {
        let steps = (IRRADIATION_MAX / IRRADIATION_STEP).round() as usize;
        let conditions: Vec<_> = (0..=steps)
            .map(|i| LightCondition::from_irradiation(i as f64 * IRRADIATION_STEP))
            .collect();

        assert_eq!(conditions.first(), Some(&LightCondition::Night));
        assert_eq!(conditions.last(), Some(&LightCondition::HighLight));
        for condition in LightCondition::ALL {
            assert!(conditions.contains(&condition));
        }
    }

    #[test]
    fn test_condition_serialization() {
        assert_eq!(
            serde_json::to_string(&LightCondition::MediumLight).unwrap(),
            "\"medium_light\""
        );

        let json = serde_json::to_string(&select_range(0.0)).unwrap();
        assert!(json.contains("\"label\":\"Night\""));
        assert!(json.contains("\"module_temp\":{\"min\":15.0,\"max\":35.0,\"default\":20.0}"));
    }
}
