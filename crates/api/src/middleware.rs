use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::context::CurrentUser;
use crate::sessions::{SessionStore, SESSION_COOKIE};
use crate::users::UserDirectory;

#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<SessionStore>,
    pub users: Arc<UserDirectory>,
}

/// Resolve the session cookie into a [`CurrentUser`] extension, or answer
/// 401 before any handler runs.
pub async fn require_session(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = session_token(req.headers())?;

    let session = state
        .sessions
        .resolve(token)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = state
        .users
        .find(session.user_id)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(CurrentUser::new(user));

    Ok(next.run(req).await)
}

fn session_token(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let token = cookie_value(headers, SESSION_COOKIE).ok_or(StatusCode::UNAUTHORIZED)?;
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(token)
}

/// Pull a single cookie out of the `Cookie` header.
pub(crate) fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let header = headers.get(header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
