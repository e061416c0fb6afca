//! Mapping of ledger failures to HTTP responses
//!
//! Every error body has the shape `{"success": false, "error": "..."}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::LedgerError;

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "error": message.into(),
        })),
    )
        .into_response()
}

/// Status code for a ledger error
pub fn status_for(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::Validation(_) => StatusCode::BAD_REQUEST,
        LedgerError::NotFound { .. } => StatusCode::NOT_FOUND,
        LedgerError::Config(_)
        | LedgerError::Io(_)
        | LedgerError::Json(_)
        | LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn ledger_error_to_response(err: LedgerError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "request failed");
    }
    json_error(status, err.to_string())
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub fn path_rejection_to_response(rejection: PathRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&LedgerError::Validation("amount is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&LedgerError::transaction_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&LedgerError::Storage("disk full".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = ledger_error_to_response(LedgerError::Validation("bad".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
