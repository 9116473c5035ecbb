use axum::{Json, response::IntoResponse};
use serde::Deserialize;

use crate::validation::{ApiJson, name::validate_name};

#[derive(Deserialize)]
pub struct NameValidationRequest {
    pub name: String,
}

/// Runs the name rules against the raw request value. An invalid name is
/// still a 200; only a malformed body is rejected (400, via ApiJson).
pub async fn validate(
    ApiJson(request): ApiJson<NameValidationRequest>,
) -> impl IntoResponse {
    Json(validate_name(&request.name))
}
