use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, assigned by storage. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog product.
///
/// `id` stays empty until a repository persists the product; storage is the
/// only place ids come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    price: Decimal,
}

impl Product {
    /// Create a product that has not been persisted yet.
    pub fn new(name: String, price: Decimal) -> Self {
        Self {
            id: None,
            name,
            price,
        }
    }

    /// Rebuild a persisted product from stored fields.
    pub fn from_record(id: ProductId, name: String, price: Decimal) -> Self {
        Self {
            id: Some(id),
            name,
            price,
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
