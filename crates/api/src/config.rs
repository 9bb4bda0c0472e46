//! Environment-driven configuration.

use std::env;

/// Seed identity for the single configured login.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    /// When present, products are stored in Postgres; otherwise in memory.
    pub database_url: Option<String>,
    pub seed_user: SeedUser,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        );

        let password = env::var("APP_USER_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("APP_USER_PASSWORD not set; using insecure dev default");
            "password".to_string()
        });

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            allowed_origins,
            database_url: env::var("DATABASE_URL").ok(),
            seed_user: SeedUser {
                name: env::var("APP_USER_NAME").unwrap_or_else(|_| "Dev User".to_string()),
                email: env::var("APP_USER_EMAIL").unwrap_or_else(|_| "dev@example.com".to_string()),
                password,
            },
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_origins("http://localhost:5173, https://app.example.com ,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://app.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn single_origin_passes_through() {
        assert_eq!(
            parse_origins("http://localhost:5173"),
            vec!["http://localhost:5173".to_string()]
        );
    }
}
