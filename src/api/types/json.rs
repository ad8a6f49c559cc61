//! JSON extractor whose rejections use the API error envelope

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Drop-in replacement for `axum::Json`. A body that is missing, malformed
/// or of the wrong shape is answered with an [`ApiError`] instead of axum's
/// plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => {
                let status = rejection.status();
                let mut err = ApiError::bad_request(rejection_message(&rejection))
                    .with_code("json_parse_error");
                err.status = status;

                Err(err)
            }
        }
    }
}

fn rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Reading {
        irradiation: f64,
    }

    fn request(body: &'static str, content_type: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let Json(reading) = Json::<Reading>::from_request(
            request(r#"{"irradiation": 0.6}"#, Some("application/json")),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(reading.irradiation, 0.6);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_as_api_error() {
        let err = Json::<Reading>::from_request(request("{}", Some("application/json")), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.response.error.code, Some("json_parse_error".to_string()));
        assert!(err.response.error.message.starts_with("Invalid JSON data"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let err = Json::<Reading>::from_request(request(r#"{"irradiation": 0.6}"#, None), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
