use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shelf_catalog::RepositoryError;

/// Map a repository failure onto the wire. No retries; callers already got
/// whatever the storage layer had to say.
pub fn repository_error_to_response(err: RepositoryError) -> axum::response::Response {
    match err {
        RepositoryError::Connection(message) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_unavailable", message)
        }
        RepositoryError::Backend(message) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Error envelope carrying a per-field detail map, used for 422 responses.
pub fn json_error_with_fields(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    errors: serde_json::Value,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
            "errors": errors,
        })),
    )
        .into_response()
}

/// Status answered on CSRF token failures; SPA clients treat it like an
/// expired session.
pub fn page_expired() -> StatusCode {
    StatusCode::from_u16(419).unwrap_or(StatusCode::FORBIDDEN)
}
