use crate::users::AuthUser;

/// Authenticated request context.
///
/// Inserted by the session middleware; present for every `/api` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user: AuthUser,
}

impl CurrentUser {
    pub fn new(user: AuthUser) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &AuthUser {
        &self.user
    }
}
