//! Seeded user directory with argon2 credential verification.

use std::collections::HashMap;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::Serialize;
use uuid::Uuid;

/// Authenticated user as exposed to handlers and the `/api/user` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
struct UserRecord {
    user: AuthUser,
    password_hash: String,
}

/// In-process user directory, seeded at startup from configuration.
///
/// Verification answers only yes or no; it never reveals which half of the
/// credential pair was wrong.
#[derive(Debug)]
pub struct UserDirectory {
    by_email: HashMap<String, UserRecord>,
}

impl UserDirectory {
    /// Build a directory holding one seeded user. Hashing happens here, at
    /// boot, so the plaintext password is never kept around.
    pub fn seeded(name: &str, email: &str, password: &str) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("failed to hash seed password")
            .to_string();

        let user = AuthUser {
            id: Uuid::now_v7(),
            name: name.to_string(),
            email: email.to_string(),
        };

        let mut by_email = HashMap::new();
        by_email.insert(email.to_string(), UserRecord { user, password_hash });

        Self { by_email }
    }

    /// Check an email/password pair, answering the matching user on success.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<AuthUser> {
        let record = self.by_email.get(email)?;
        let parsed = PasswordHash::new(&record.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .ok()?;
        Some(record.user.clone())
    }

    pub fn find(&self, id: Uuid) -> Option<AuthUser> {
        self.by_email
            .values()
            .find(|record| record.user.id == id)
            .map(|record| record.user.clone())
    }
}
