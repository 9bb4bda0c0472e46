use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::extract::ValidatedJson;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;
use crate::middleware;
use crate::sessions::{mint_token, CSRF_COOKIE, CSRF_HEADER, SESSION_COOKIE};

/// `GET /csrf-cookie`: hand the SPA a token it must echo back in
/// `X-XSRF-TOKEN` on login and logout.
pub async fn csrf_cookie() -> Response {
    let cookie = format!("{CSRF_COOKIE}={}; Path=/; SameSite=Lax", mint_token());
    set_cookie(StatusCode::NO_CONTENT, &cookie)
}

/// `POST /login`: CSRF check, credential check, then a fresh session cookie.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    ValidatedJson(body): ValidatedJson<dto::LoginRequest>,
) -> Response {
    if let Err(response) = verify_csrf(&headers) {
        return response;
    }

    let user = match services
        .users()
        .verify_credentials(&body.email, &body.password)
    {
        Some(user) => user,
        None => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "these credentials do not match our records",
            )
        }
    };

    let token = services.sessions().issue(user.id);
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    set_cookie(StatusCode::NO_CONTENT, &cookie)
}

/// `POST /logout`: revoke the presented session, if any. Always succeeds so
/// the client can clear its state unconditionally.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = verify_csrf(&headers) {
        return response;
    }

    if let Some(token) = middleware::cookie_value(&headers, SESSION_COOKIE) {
        services.sessions().revoke(token);
    }

    // Expire the cookie client-side as well.
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    set_cookie(StatusCode::NO_CONTENT, &cookie)
}

/// `GET /api/user`: identity endpoint the SPA polls to restore sessions
/// across page reloads.
pub async fn current_user(Extension(current): Extension<CurrentUser>) -> Response {
    Json(current.user().clone()).into_response()
}

/// Double-submit check: the `XSRF-TOKEN` cookie must match the
/// `X-XSRF-TOKEN` header.
fn verify_csrf(headers: &HeaderMap) -> Result<(), Response> {
    let cookie = middleware::cookie_value(headers, CSRF_COOKIE);
    let header = headers.get(CSRF_HEADER).and_then(|value| value.to_str().ok());

    match (cookie, header) {
        (Some(cookie), Some(header)) if !cookie.is_empty() && cookie == header => Ok(()),
        _ => Err(errors::json_error(
            errors::page_expired(),
            "csrf_mismatch",
            "CSRF token missing or mismatched",
        )),
    }
}

fn set_cookie(status: StatusCode, cookie: &str) -> Response {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            let mut headers = HeaderMap::new();
            headers.insert(header::SET_COOKIE, value);
            (status, headers).into_response()
        }
        Err(_) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "could not encode cookie",
        ),
    }
}
