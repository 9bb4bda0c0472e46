//! Storage adapters for the catalog.
//!
//! Two interchangeable [`shelf_catalog::ProductRepository`] backends: an
//! in-memory map for tests/dev and a Postgres implementation for real
//! deployments. The composition root picks one at startup.

pub mod product_store;

pub use product_store::{InMemoryProductRepository, PostgresProductRepository};
