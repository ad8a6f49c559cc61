//! Slider range endpoint handler

use tracing::debug;

use crate::api::types::{ApiError, Json, Query, RangesQuery, RangesResponse};
use crate::domain::observation::validate_irradiation;
use crate::domain::range::IRRADIATION_DEFAULT;
use crate::domain::select_range;

/// GET /v1/ranges?irradiation=
///
/// Without a query the slider default is used, matching the first render
/// of the dashboard.
pub async fn get_ranges(
    Query(query): Query<RangesQuery>,
) -> Result<Json<RangesResponse>, ApiError> {
    let irradiation = query.irradiation.unwrap_or(IRRADIATION_DEFAULT);
    validate_irradiation(irradiation)?;

    let profile = select_range(irradiation);
    debug!(irradiation, condition = %profile.condition, "Selected range profile");

    Ok(Json(RangesResponse::new(irradiation, profile)))
}
