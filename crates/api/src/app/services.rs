//! Service wiring for the HTTP application.

use std::sync::Arc;

use shelf_catalog::{CreateProduct, ProductRepository};
use shelf_infra::{InMemoryProductRepository, PostgresProductRepository};

use crate::config::AppConfig;
use crate::sessions::SessionStore;
use crate::users::UserDirectory;

/// Everything handlers need, built once at startup and shared via `Extension`.
pub struct AppServices {
    products: Arc<dyn ProductRepository>,
    create_product: CreateProduct,
    sessions: Arc<SessionStore>,
    users: Arc<UserDirectory>,
}

impl AppServices {
    pub fn products(&self) -> &Arc<dyn ProductRepository> {
        &self.products
    }

    pub fn create_product(&self) -> &CreateProduct {
        &self.create_product
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    pub fn users(&self) -> &Arc<UserDirectory> {
        &self.users
    }
}

/// Build the service graph for `config`.
///
/// `DATABASE_URL` selects the Postgres store; without it products live in
/// memory, which is the dev and test default.
pub async fn build_services(config: &AppConfig) -> AppServices {
    let products: Arc<dyn ProductRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url)
                .await
                .expect("failed to connect to Postgres");
            tracing::info!("product store: postgres");
            Arc::new(PostgresProductRepository::new(pool))
        }
        None => {
            tracing::info!("product store: in-memory");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    build_with_repository(config, products)
}

/// Wire services around an existing repository. Tests hand in an in-memory
/// store here and keep their own handle on it to observe persisted state.
pub fn build_with_repository(
    config: &AppConfig,
    products: Arc<dyn ProductRepository>,
) -> AppServices {
    let create_product = CreateProduct::new(products.clone());
    let users = Arc::new(UserDirectory::seeded(
        &config.seed_user.name,
        &config.seed_user.email,
        &config.seed_user.password,
    ));
    let sessions = Arc::new(SessionStore::new());

    AppServices {
        products,
        create_product,
        sessions,
        users,
    }
}
