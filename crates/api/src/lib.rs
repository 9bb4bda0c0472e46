//! HTTP API: server, routing, session auth, and request/response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod sessions;
pub mod users;
