use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::app::errors;

/// JSON extractor that validates the payload before the handler sees it.
///
/// Malformed bodies and failed field rules both answer 422 with a field map,
/// so handlers only ever receive well-formed input.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| body_rejection_response(&rejection))?;

        value
            .validate()
            .map_err(|errors| validation_errors_response(&errors))?;

        Ok(Self(value))
    }
}

fn body_rejection_response(rejection: &JsonRejection) -> Response {
    errors::json_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        rejection.body_text(),
    )
}

fn validation_errors_response(errors: &validator::ValidationErrors) -> Response {
    let mut fields = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<serde_json::Value> = field_errors
            .iter()
            .map(|error| match &error.message {
                Some(message) => serde_json::Value::String(message.to_string()),
                None => serde_json::Value::String(format!("{field} is invalid")),
            })
            .collect();
        fields.insert(field.to_string(), serde_json::Value::Array(messages));
    }

    errors::json_error_with_fields(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        "the given data was invalid",
        serde_json::Value::Object(fields),
    )
}
