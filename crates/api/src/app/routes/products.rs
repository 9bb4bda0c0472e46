use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use shelf_catalog::ProductId;

use crate::app::extract::ValidatedJson;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /api/products`: validated body in, persisted product out.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    ValidatedJson(body): ValidatedJson<dto::CreateProductRequest>,
) -> axum::response::Response {
    let created = match services
        .create_product()
        .execute(body.name, body.price)
        .await
    {
        Ok(product) => product,
        Err(e) => return errors::repository_error_to_response(e),
    };

    // The repository contract guarantees an id on the way back.
    if created.id().is_none() {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "storage_error",
            "storage did not assign an id",
        );
    }

    (StatusCode::CREATED, Json(created)).into_response()
}

/// `GET /api/products/:id`: fetch one product, 404 when absent.
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: i64 = match id.parse() {
        Ok(value) if value > 0 => value,
        _ => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.products().find_by_id(ProductId::new(id)).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        Err(e) => errors::repository_error_to_response(e),
    }
}
