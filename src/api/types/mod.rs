//! API request, response and error types

pub mod error;
pub mod json;
pub mod prediction;
pub mod query;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use query::Query;
pub use prediction::{
    PredictRequest, PredictResponse, RangesQuery, RangesResponse, SliderSpec,
};
