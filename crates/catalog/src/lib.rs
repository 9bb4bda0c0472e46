//! Product catalog domain and application layer.
//!
//! Business types and the product-creation use case, free of HTTP and storage
//! concerns; persistence is reached only through the [`ProductRepository`]
//! capability trait.

pub mod create_product;
pub mod product;
pub mod repository;

pub use create_product::CreateProduct;
pub use product::{Product, ProductId};
pub use repository::{ProductRepository, RepositoryError};
