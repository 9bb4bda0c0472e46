//! Route table and navigation guard.

use crate::api::SessionApi;
use crate::store::AuthStore;

/// The two views of the catalog app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    /// Whether the view sits behind the session guard.
    pub fn requires_auth(self) -> bool {
        match self {
            Route::Login => false,
            Route::Dashboard => true,
        }
    }
}

/// Tracks the current view and runs the guard on every navigation, the way
/// a browser router's before-each hook would.
#[derive(Debug)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Login,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Move to `to`, subject to the guard. A logged-out store gets one
    /// chance to recover its session first, which covers a page reload
    /// with a still-live cookie. Returns the route actually entered.
    pub async fn navigate<A: SessionApi>(
        &mut self,
        to: Route,
        store: &mut AuthStore<A>,
    ) -> Route {
        if !store.logged_in() {
            store.fetch_user().await;
        }
        if to.requires_auth() && !store.logged_in() {
            self.current = Route::Login;
        } else {
            self.current = to;
        }
        self.current
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::api::{ClientError, MockSessionApi};
    use crate::types::CurrentUser;

    fn sample_user() -> CurrentUser {
        CurrentUser {
            id: Uuid::now_v7(),
            name: "Dev User".to_string(),
            email: "dev@example.com".to_string(),
        }
    }

    #[test]
    fn only_the_dashboard_requires_auth() {
        assert!(!Route::Login.requires_auth());
        assert!(Route::Dashboard.requires_auth());
    }

    #[tokio::test]
    async fn anonymous_visitors_are_redirected_to_login() {
        let mut api = MockSessionApi::new();
        api.expect_fetch_user()
            .times(1)
            .returning(|| Err(ClientError::SessionExpired));

        let mut store = AuthStore::new(api);
        let mut router = Router::new();
        let entered = router.navigate(Route::Dashboard, &mut store).await;

        assert_eq!(entered, Route::Login);
        assert_eq!(router.current(), Route::Login);
    }

    #[tokio::test]
    async fn a_live_session_survives_a_reload() {
        let mut api = MockSessionApi::new();
        api.expect_fetch_user()
            .times(1)
            .returning(|| Ok(sample_user()));

        let mut store = AuthStore::new(api);
        let mut router = Router::new();
        let entered = router.navigate(Route::Dashboard, &mut store).await;

        assert_eq!(entered, Route::Dashboard);
        assert!(store.logged_in());
    }

    #[tokio::test]
    async fn logged_in_stores_are_not_probed_again() {
        let mut api = MockSessionApi::new();
        api.expect_fetch_user()
            .times(1)
            .returning(|| Ok(sample_user()));

        let mut store = AuthStore::new(api);
        store.fetch_user().await;

        let mut router = Router::new();
        let entered = router.navigate(Route::Dashboard, &mut store).await;

        assert_eq!(entered, Route::Dashboard);
    }

    #[tokio::test]
    async fn public_routes_open_while_logged_out() {
        let mut api = MockSessionApi::new();
        api.expect_fetch_user()
            .times(1)
            .returning(|| Err(ClientError::SessionExpired));

        let mut store = AuthStore::new(api);
        let mut router = Router::new();
        let entered = router.navigate(Route::Login, &mut store).await;

        assert_eq!(entered, Route::Login);
        assert!(!store.logged_in());
    }
}
