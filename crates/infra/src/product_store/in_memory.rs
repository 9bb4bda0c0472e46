use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;

use shelf_catalog::{Product, ProductId, ProductRepository, RepositoryError};

#[derive(Debug, Clone)]
struct ProductRecord {
    name: String,
    price: Decimal,
}

#[derive(Debug, Default)]
struct State {
    records: HashMap<i64, ProductRecord>,
    last_id: i64,
}

/// In-memory product store.
///
/// Intended for tests/dev. Ids come from a counter that always stays ahead of
/// any id written explicitly, so assigned ids never collide with upserts.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<State>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::backend("state lock poisoned"))?;

        let id = match product.id() {
            Some(id) => {
                state.last_id = state.last_id.max(id.value());
                id
            }
            None => {
                state.last_id += 1;
                ProductId::new(state.last_id)
            }
        };

        let record = ProductRecord {
            name: product.name().to_string(),
            price: product.price(),
        };
        let persisted = Product::from_record(id, record.name.clone(), record.price);
        state.records.insert(id.value(), record);

        Ok(persisted)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::backend("state lock poisoned"))?;

        Ok(state
            .records
            .get(&id.value())
            .map(|record| Product::from_record(id, record.name.clone(), record.price)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids_starting_at_one() {
        let store = InMemoryProductRepository::new();

        let first = store
            .save(Product::new("First".to_string(), price(100)))
            .await
            .unwrap();
        let second = store
            .save(Product::new("Second".to_string(), price(200)))
            .await
            .unwrap();

        assert_eq!(first.id(), Some(ProductId::new(1)));
        assert_eq!(second.id(), Some(ProductId::new(2)));
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let store = InMemoryProductRepository::new();

        let saved = store
            .save(Product::new("New Product".to_string(), price(19_999)))
            .await
            .unwrap();
        let id = saved.id().unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id(), Some(id));
        assert_eq!(found.name(), "New Product");
        assert_eq!(found.price(), price(19_999));
    }

    #[tokio::test]
    async fn find_answers_none_for_unknown_id() {
        let store = InMemoryProductRepository::new();
        let missing = store.find_by_id(ProductId::new(404)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn save_with_id_updates_in_place() {
        let store = InMemoryProductRepository::new();

        let created = store
            .save(Product::new("Before".to_string(), price(100)))
            .await
            .unwrap();
        let id = created.id().unwrap();

        let updated = store
            .save(Product::from_record(id, "After".to_string(), price(250)))
            .await
            .unwrap();
        assert_eq!(updated.id(), Some(id));

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name(), "After");
        assert_eq!(found.price(), price(250));
    }

    #[tokio::test]
    async fn save_with_unknown_id_creates_at_that_key() {
        let store = InMemoryProductRepository::new();

        let written = store
            .save(Product::from_record(
                ProductId::new(10),
                "Imported".to_string(),
                price(999),
            ))
            .await
            .unwrap();
        assert_eq!(written.id(), Some(ProductId::new(10)));

        let found = store.find_by_id(ProductId::new(10)).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn assigned_ids_skip_past_explicit_upserts() {
        let store = InMemoryProductRepository::new();

        store
            .save(Product::from_record(
                ProductId::new(10),
                "Imported".to_string(),
                price(999),
            ))
            .await
            .unwrap();

        let next = store
            .save(Product::new("Fresh".to_string(), price(100)))
            .await
            .unwrap();
        assert_eq!(next.id(), Some(ProductId::new(11)));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 64,
                ..ProptestConfig::default()
            })]

            /// Property: whatever goes in comes back out under the assigned id.
            #[test]
            fn save_then_find_preserves_fields(
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                cents in 0i64..10_000_000
            ) {
                let rt = tokio::runtime::Runtime::new().unwrap();
                let found = rt.block_on(async {
                    let store = InMemoryProductRepository::new();
                    let saved = store
                        .save(Product::new(name.clone(), Decimal::new(cents, 2)))
                        .await
                        .unwrap();
                    store.find_by_id(saved.id().unwrap()).await.unwrap().unwrap()
                });

                prop_assert!(found.id().unwrap().value() > 0);
                prop_assert_eq!(found.name(), name.as_str());
                prop_assert_eq!(found.price(), Decimal::new(cents, 2));
            }
        }
    }
}
