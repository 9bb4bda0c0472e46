use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;

pub mod products;
pub mod session;

/// Router for all session-guarded endpoints (mounted under `/api`).
pub fn api_router() -> Router {
    Router::new()
        .route("/user", get(session::current_user))
        .route("/products", post(products::create_product))
        .route("/products/:id", get(products::get_product))
}

/// Liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
