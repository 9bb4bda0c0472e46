use std::sync::Arc;

use rust_decimal::Decimal;

use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryError};

/// Application service that records a new product.
///
/// Receives its repository at construction time; nothing is resolved from
/// globals at call time.
pub struct CreateProduct {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Create and persist a product from already-validated input.
    ///
    /// Builds an unpersisted [`Product`] and hands it to the repository in a
    /// single `save` call; the repository answers with the id assigned.
    /// Storage errors propagate untranslated.
    pub async fn execute(&self, name: String, price: Decimal) -> Result<Product, RepositoryError> {
        let product = Product::new(name, price);
        self.repository.save(product).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;
    use crate::repository::MockProductRepository;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[tokio::test]
    async fn execute_saves_an_unpersisted_product_exactly_once() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_save()
            .times(1)
            .withf(|product| {
                product.id().is_none()
                    && product.name() == "New Product"
                    && product.price() == Decimal::new(19_999, 2)
            })
            .returning(|product| {
                Ok(Product::from_record(
                    ProductId::new(1),
                    product.name().to_string(),
                    product.price(),
                ))
            });

        let use_case = CreateProduct::new(Arc::new(repository));
        let created = use_case
            .execute("New Product".to_string(), price(19_999))
            .await
            .unwrap();

        assert_eq!(created.id(), Some(ProductId::new(1)));
        assert_eq!(created.name(), "New Product");
        assert_eq!(created.price(), price(19_999));
    }

    #[tokio::test]
    async fn execute_returns_the_repository_answer_verbatim() {
        let mut repository = MockProductRepository::new();
        repository.expect_save().times(1).returning(|_| {
            Ok(Product::from_record(
                ProductId::new(41),
                "Renamed By Storage".to_string(),
                price(100),
            ))
        });

        let use_case = CreateProduct::new(Arc::new(repository));
        let created = use_case
            .execute("Original".to_string(), price(100))
            .await
            .unwrap();

        assert_eq!(created.id(), Some(ProductId::new(41)));
        assert_eq!(created.name(), "Renamed By Storage");
    }

    #[tokio::test]
    async fn execute_propagates_storage_errors_untranslated() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::backend("write failed")));

        let use_case = CreateProduct::new(Arc::new(repository));
        let err = use_case
            .execute("New Product".to_string(), price(19_999))
            .await
            .unwrap_err();

        match err {
            RepositoryError::Backend(message) => assert_eq!(message, "write failed"),
            other => panic!("expected backend error, got {other:?}"),
        }
    }
}
