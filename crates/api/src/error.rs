//! API error types with HTTP response mapping.

use article_store::StoreError;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures a route does not handle itself.
///
/// Every variant surfaces as a bare 500: the response carries no body, the
/// cause only goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] BytesRejection),

    /// The request body is not valid JSON for the route.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The store rejected or failed the operation.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "unhandled request failure");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
