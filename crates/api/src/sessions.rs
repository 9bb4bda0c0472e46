//! In-process session registry for the cookie-based SPA flow.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Cookie holding the opaque session token.
pub const SESSION_COOKIE: &str = "session";
/// Cookie the SPA reads the CSRF token from.
pub const CSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header the SPA echoes the CSRF token back in.
pub const CSRF_HEADER: &str = "x-xsrf-token";

/// Mint an opaque, URL-safe token.
pub fn mint_token() -> String {
    Uuid::now_v7().simple().to_string()
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Active sessions keyed by cookie token.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a session for `user_id` and return its cookie token.
    pub fn issue(&self, user_id: Uuid) -> String {
        let token = mint_token();
        if let Ok(mut sessions) = self.inner.write() {
            sessions.insert(
                token.clone(),
                Session {
                    user_id,
                    created_at: Utc::now(),
                },
            );
        }
        token
    }

    pub fn resolve(&self, token: &str) -> Option<Session> {
        let sessions = self.inner.read().ok()?;
        sessions.get(token).cloned()
    }

    pub fn revoke(&self, token: &str) {
        if let Ok(mut sessions) = self.inner.write() {
            sessions.remove(token);
        }
    }
}
