//! HTTP application assembly (Axum router + service graph).
//!
//! The folder reads top-down:
//! - `services.rs`: composition root (store selection, use case, session state)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and their validation rules
//! - `extract.rs`: validating JSON extractor
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::middleware;
use crate::sessions::CSRF_HEADER;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(config: &AppConfig, services: Arc<AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        sessions: services.sessions().clone(),
        users: services.users().clone(),
    };

    // Session-guarded routes live under /api.
    let protected = routes::api_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::require_session,
    ));

    Router::new()
        .route("/health", get(routes::health))
        .route("/csrf-cookie", get(routes::session::csrf_cookie))
        .route("/login", post(routes::session::login))
        .route("/logout", post(routes::session::logout))
        .nest("/api", protected)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)),
        )
}

/// CORS for the browser client: configured origins only, credentials allowed
/// so session cookies survive cross-origin calls.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(CSRF_HEADER)])
        .allow_credentials(true)
}
