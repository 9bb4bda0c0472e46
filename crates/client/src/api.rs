//! HTTP facade over the Shelf API.
//!
//! One shared cookie jar stands in for the browser: the CSRF cookie and the
//! session cookie land there and ride along on every later call, so the
//! client behaves like a credentialed single-page app.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response, StatusCode, Url};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{Credentials, CurrentUser, Product};

const CSRF_COOKIE: &str = "XSRF-TOKEN";
const CSRF_HEADER: &str = "x-xsrf-token";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decode failure before a usable answer existed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered 401 or 419; the session must be re-established.
    #[error("session expired; log in again")]
    SessionExpired,
    /// Any other non-success answer, with the raw body for diagnosis.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// The session-facing calls, as a trait so the store and router can be
/// exercised against a mock without a running server.
#[automock]
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Prime the CSRF cookie ahead of a login or logout attempt.
    async fn acquire_csrf(&self) -> Result<(), ClientError>;
    async fn login(&self, credentials: Credentials) -> Result<(), ClientError>;
    async fn logout(&self) -> Result<(), ClientError>;
    async fn fetch_user(&self) -> Result<CurrentUser, ClientError>;
}

/// Cookie-carrying client bound to one API root.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against the API root, e.g. `http://localhost:8080`.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let jar = Arc::new(Jar::default());
        let http = Client::builder().cookie_provider(jar.clone()).build()?;
        Ok(Self {
            http,
            jar,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    /// Read the CSRF token back out of the jar. The server wants the same
    /// value echoed in the `x-xsrf-token` header on login and logout.
    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let raw = header.to_str().ok()?;
        raw.split(';').map(str::trim).find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == CSRF_COOKIE).then(|| value.to_string())
        })
    }

    /// Single funnel for response statuses. 401 and 419 both mean the
    /// session is gone, whatever the endpoint.
    async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED || status.as_u16() == 419 {
            return Err(ClientError::SessionExpired);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn create_product(
        &self,
        name: &str,
        price: Decimal,
    ) -> Result<Product, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/api/products"))
            .json(&serde_json::json!({ "name": name, "price": price }))
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn fetch_product(&self, id: i64) -> Result<Product, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/products/{id}")))
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SessionApi for ApiClient {
    async fn acquire_csrf(&self) -> Result<(), ClientError> {
        let response = self.http.get(self.endpoint("/csrf-cookie")).send().await?;
        self.check(response).await?;
        Ok(())
    }

    async fn login(&self, credentials: Credentials) -> Result<(), ClientError> {
        let token = self.csrf_token().ok_or(ClientError::SessionExpired)?;
        let response = self
            .http
            .post(self.endpoint("/login"))
            .header(CSRF_HEADER, token)
            .json(&credentials)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let token = self.csrf_token().ok_or(ClientError::SessionExpired)?;
        let response = self
            .http
            .post(self.endpoint("/logout"))
            .header(CSRF_HEADER, token)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn fetch_user(&self) -> Result<CurrentUser, ClientError> {
        let response = self.http.get(self.endpoint("/api/user")).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        ApiClient::new(url).unwrap()
    }

    #[test]
    fn endpoints_are_rooted_at_the_base_url() {
        let client = client();
        assert_eq!(
            client.endpoint("/api/products").as_str(),
            "http://127.0.0.1:8080/api/products"
        );
        assert_eq!(
            client.endpoint("/csrf-cookie").as_str(),
            "http://127.0.0.1:8080/csrf-cookie"
        );
    }

    #[test]
    fn csrf_token_is_absent_until_a_cookie_lands() {
        let client = client();
        assert_eq!(client.csrf_token(), None);
    }

    #[test]
    fn csrf_token_is_read_back_from_the_jar() {
        let client = client();
        client.jar.add_cookie_str(
            "XSRF-TOKEN=abc123; Path=/",
            &Url::parse("http://127.0.0.1:8080").unwrap(),
        );
        assert_eq!(client.csrf_token().as_deref(), Some("abc123"));
    }
}
