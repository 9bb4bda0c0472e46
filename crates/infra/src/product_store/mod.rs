//! Product repository backends.
//!
//! Both backends implement the same save contract: a product without an id
//! gets a freshly assigned one, a product with an id is written at that key,
//! created if missing. Lookups answer `Ok(None)` for absent rows.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
