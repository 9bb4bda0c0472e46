use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::product::{Product, ProductId};

/// Storage failures surfaced by repository implementations.
///
/// Absence of a row is never an error; lookups express it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository connection error: {0}")]
    Connection(String),
    #[error("repository backend error: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Persistence capability for products.
#[automock]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist `product`.
    ///
    /// Without an id this creates a new record and returns the product with
    /// the assigned id filled in. With an id it writes the record at that
    /// key, creating it if missing, and returns the product unchanged.
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Fetch a product by id. `Ok(None)` when no such product exists.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
}
