//! Postgres-backed product store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use shelf_catalog::{Product, ProductId, ProductRepository, RepositoryError};

/// Product repository on Postgres.
///
/// Expects a `products` table provisioned externally:
///
/// ```sql
/// CREATE TABLE products (
///     id         BIGSERIAL PRIMARY KEY,
///     name       VARCHAR(255) NOT NULL,
///     price      NUMERIC(10, 2) NOT NULL,
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Every call is a single statement; concurrency is delegated to the pool and
/// the engine. Failures map onto [`RepositoryError`] and are never retried.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::connection(err.to_string())
        }
        _ => RepositoryError::backend(err.to_string()),
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let price: Decimal = row.try_get("price")?;
    Ok(Product::from_record(ProductId::new(id), name, price))
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[tracing::instrument(skip(self, product), fields(product_id = ?product.id()))]
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        match product.id() {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO products (id, name, price)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id)
                    DO UPDATE SET
                        name = EXCLUDED.name,
                        price = EXCLUDED.price,
                        updated_at = NOW()
                    "#,
                )
                .bind(id.value())
                .bind(product.name())
                .bind(product.price())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                Ok(product)
            }
            None => {
                let row = sqlx::query("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id")
                    .bind(product.name())
                    .bind(product.price())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
                Ok(Product::from_record(
                    ProductId::new(id),
                    product.name().to_string(),
                    product.price(),
                ))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => {
                let product = product_from_row(&row).map_err(map_sqlx_error)?;
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }
}
