//! HTTP error response mapping.

use std::error::Error;
use std::fmt::Write;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use innkeep_domain::error::{InnkeepError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable description of what went wrong.
    detail: String,
}

/// Maps [`InnkeepError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(InnkeepError);

impl From<InnkeepError> for ApiError {
    fn from(err: InnkeepError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::InvalidQuery(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            InnkeepError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            InnkeepError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            InnkeepError::Storage(err) => {
                tracing::error!(error = %error_chain(&**err), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail: message })).into_response()
    }
}

/// Render an error followed by every `source()` below it, joined by `: `.
fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("database error")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn should_include_sources_in_error_chain() {
        let err = Outer(std::io::Error::other("database is locked"));
        assert_eq!(error_chain(&err), "database error: database is locked");
    }

    #[test]
    fn should_render_single_error_without_separator() {
        let err = std::io::Error::other("boom");
        assert_eq!(error_chain(&err), "boom");
    }
}
