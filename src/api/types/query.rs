//! Query-string extractor whose rejections use the API error envelope

use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Drop-in replacement for `axum::extract::Query`. A query string that does
/// not deserialize is answered with an [`ApiError`] instead of axum's
/// plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => {
                let status = rejection.status();
                let mut err = ApiError::bad_request(rejection_message(&rejection))
                    .with_code("query_parse_error");
                err.status = status;

                Err(err)
            }
        }
    }
}

fn rejection_message(rejection: &QueryRejection) -> String {
    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            format!("Invalid query string: {}", err.body_text())
        }
        _ => "Invalid query string".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        irradiation: Option<f64>,
    }

    async fn extract(uri: &str) -> Result<Query<Params>, ApiError> {
        let (mut parts, _) = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts();

        Query::<Params>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_query_is_extracted() {
        let Query(params) = extract("/?irradiation=0.45").await.unwrap();
        assert_eq!(params.irradiation, Some(0.45));

        let Query(params) = extract("/").await.unwrap();
        assert_eq!(params.irradiation, None);
    }

    #[tokio::test]
    async fn test_non_numeric_value_is_rejected_as_api_error() {
        let err = extract("/?irradiation=abc").await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code, Some("query_parse_error".to_string()));
        assert!(err.response.error.message.starts_with("Invalid query string"));
    }
}
