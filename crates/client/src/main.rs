//! Round-trip demo against a running Shelf API.
//!
//! Logs in with the seeded account, creates a product, fetches it back by
//! id, and logs out. Configure with `API_BASE_URL`, `API_EMAIL`, and
//! `API_PASSWORD`.

use anyhow::Context;
use reqwest::Url;
use rust_decimal::Decimal;

use shelf_client::{ApiClient, AuthStore, Credentials, Router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    shelf_observability::init();

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let email = std::env::var("API_EMAIL").unwrap_or_else(|_| "dev@example.com".to_string());
    let password = std::env::var("API_PASSWORD").unwrap_or_else(|_| "password".to_string());

    let base = Url::parse(&base_url).context("invalid API_BASE_URL")?;
    let api = ApiClient::new(base).context("failed to build the HTTP client")?;

    let mut store = AuthStore::new(api);
    let mut router = Router::new();

    store
        .login(&mut router, Credentials { email, password })
        .await
        .context("login failed")?;
    tracing::info!(route = ?router.current(), "logged in");

    let created = store
        .api()
        .create_product("Demo Product", Decimal::new(19_999, 2))
        .await
        .context("product creation failed")?;
    tracing::info!(id = created.id, "created product");

    let fetched = store
        .api()
        .fetch_product(created.id)
        .await
        .context("product fetch failed")?;
    println!(
        "round trip ok: #{} {} at {}",
        fetched.id, fetched.name, fetched.price
    );

    store.logout(&mut router).await.context("logout failed")?;
    tracing::info!(route = ?router.current(), "logged out");

    Ok(())
}
