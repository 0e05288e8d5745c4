//! Response plumbing for API handlers.
//!
//! Every handler returns an [`ApiResponse<T>`]: the serialized
//! [`OperationOutcome`] envelope with the HTTP status derived from its
//! [`ResultType`]. Clients parse one body shape for every outcome.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use hacienda_core::outcome::{OperationOutcome, ResultType};

/// Wrapper turning an [`OperationOutcome`] into an HTTP response.
#[derive(Debug)]
pub struct ApiResponse<T>(pub OperationOutcome<T>);

impl<T> From<OperationOutcome<T>> for ApiResponse<T> {
    fn from(outcome: OperationOutcome<T>) -> Self {
        Self(outcome)
    }
}

/// HTTP status for each outcome classification.
pub fn status_for(result: ResultType) -> StatusCode {
    match result {
        ResultType::Ok => StatusCode::OK,
        ResultType::Created => StatusCode::CREATED,
        ResultType::PartialOk => StatusCode::PARTIAL_CONTENT,
        ResultType::Invalid => StatusCode::BAD_REQUEST,
        ResultType::Unauthorized => StatusCode::UNAUTHORIZED,
        ResultType::PermissionDenied => StatusCode::FORBIDDEN,
        ResultType::NotFound => StatusCode::NOT_FOUND,
        ResultType::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (status_for(self.0.result), Json(self.0)).into_response()
    }
}
