//! Range selection - temperature slider bounds driven by irradiation

mod profile;

pub use profile::{
    select_range, Bounds, LightCondition, RangeProfile, IRRADIATION_DEFAULT, IRRADIATION_MAX,
    IRRADIATION_MIN, IRRADIATION_STEP, TEMPERATURE_STEP,
};
