use axum::{Json, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub utc_now: DateTime<Utc>,
    pub status: &'static str,
}

/// Liveness probe. Always 200; the timestamp doubles as a clock check
/// for the frontend.
pub async fn get_health() -> impl IntoResponse {
    Json(HealthStatus {
        utc_now: Utc::now(),
        status: "OK",
    })
}
