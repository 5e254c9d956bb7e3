use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorBody;
use crate::storage::StoreError;

/// A request failure on its way to becoming an HTTP response.
///
/// Handlers return `Result<_, ApiError>`; this type's `IntoResponse` impl is
/// the single terminal stage where every failure kind is mapped to a status
/// and body. Nothing elsewhere in the API layer sets an error status.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is missing `name` or `number`; rejected before the data
    /// layer is touched.
    MissingFields,
    /// A failure reported by the storage layer.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingFields => {
                error_body(StatusCode::BAD_REQUEST, "name or number is missing")
            }
            ApiError::Store(StoreError::MalformedId) => {
                error_body(StatusCode::BAD_REQUEST, "Malformed id")
            }
            ApiError::Store(StoreError::Invalid(err)) => {
                error_body(StatusCode::BAD_REQUEST, &err.to_string())
            }
            ApiError::Store(StoreError::DuplicateName) => {
                error_body(StatusCode::BAD_REQUEST, "name must be unique")
            }
            // Empty body; the client asked for something that isn't there.
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(StoreError::Backend(err)) => {
                tracing::error!("unhandled backend failure: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
