//! Session state machine.
//!
//! Logged-in is exactly "the store holds a user". The login and logout
//! flows drive the injected router so the current view always agrees with
//! the session state.

use crate::api::{ClientError, SessionApi};
use crate::router::{Route, Router};
use crate::types::{Credentials, CurrentUser};

pub struct AuthStore<A: SessionApi> {
    api: A,
    user: Option<CurrentUser>,
}

impl<A: SessionApi> AuthStore<A> {
    pub fn new(api: A) -> Self {
        Self { api, user: None }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Refresh the user from the API. Any failure, an expired session
    /// included, leaves the store logged out instead of surfacing an error.
    pub async fn fetch_user(&mut self) {
        match self.api.fetch_user().await {
            Ok(user) => self.user = Some(user),
            Err(err) => {
                tracing::debug!(error = %err, "session probe failed, treating as logged out");
                self.user = None;
            }
        }
    }

    /// Full login flow: prime the CSRF cookie, post the credentials, then
    /// load the user, strictly in that order. Once logged in, the router is
    /// moved to the dashboard.
    pub async fn login(
        &mut self,
        router: &mut Router,
        credentials: Credentials,
    ) -> Result<(), ClientError> {
        self.api.acquire_csrf().await?;
        self.api.login(credentials).await?;
        self.fetch_user().await;
        if self.logged_in() {
            router.navigate(Route::Dashboard, self).await;
        }
        Ok(())
    }

    /// Post the logout, then clear local state whatever the server said.
    /// The network result is still returned so callers can report it.
    pub async fn logout(&mut self, router: &mut Router) -> Result<(), ClientError> {
        let result = self.api.logout().await;
        self.user = None;
        router.navigate(Route::Login, self).await;
        result
    }
}
