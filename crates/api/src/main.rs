use std::sync::Arc;

use shelf_api::app::{build_app, services};
use shelf_api::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    shelf_observability::init();

    let config = AppConfig::from_env();
    let services = Arc::new(services::build_services(&config).await);
    let app = build_app(&config, services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
