//! Companion client for the Shelf API.
//!
//! Mirrors what a browser single-page app does against the service: a
//! cookie-carrying HTTP client ([`api::ApiClient`]), a session store that
//! tracks the authenticated user ([`store::AuthStore`]), and a route table
//! with an auth guard ([`router::Router`]). The binary target wires the
//! three together for a full login/create/fetch round trip.

pub mod api;
pub mod router;
pub mod store;
pub mod types;

pub use api::{ApiClient, ClientError, SessionApi};
pub use router::{Route, Router};
pub use store::AuthStore;
pub use types::{Credentials, CurrentUser, Product};
