//! Ranges command - print the slider bounds for an irradiation reading

use clap::Args;

use crate::domain::observation::validate_irradiation;
use crate::domain::range::{IRRADIATION_DEFAULT, TEMPERATURE_STEP};
use crate::domain::{select_range, Bounds, RangeProfile};

/// Arguments for the ranges command
#[derive(Args, Clone, Debug)]
pub struct RangesArgs {
    /// Irradiation in kW/m² (0.0 - 1.2)
    #[arg(long, default_value_t = IRRADIATION_DEFAULT)]
    pub irradiation: f64,
}

pub async fn run(args: RangesArgs) -> anyhow::Result<()> {
    validate_irradiation(args.irradiation)?;

    println!("{}", render(args.irradiation, &select_range(args.irradiation)));

    Ok(())
}

fn render(irradiation: f64, profile: &RangeProfile) -> String {
    format!(
        "Irradiation {:.2} kW/m²: {}\n  Module temperature:  {}\n  Ambient temperature: {}",
        irradiation,
        profile.label,
        render_bounds(&profile.module_temp),
        render_bounds(&profile.ambient_temp),
    )
}

fn render_bounds(bounds: &Bounds) -> String {
    format!(
        "{:.1} - {:.1} °C (default {:.1}, step {})",
        bounds.min, bounds.max, bounds.default, TEMPERATURE_STEP
    )
}
