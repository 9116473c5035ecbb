pub mod health;
pub mod name_validation;

use axum::{
    Router,
    routing::{get, post},
};

pub fn create_router() -> Router {
    Router::new()
        .route("/api/health", get(health::get_health))
        .route(
            "/api/namevalidation/validate",
            post(name_validation::validate),
        )
}
