use axum::{Json, async_trait, extract::FromRequest, http::Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub mod name;

/// JSON extractor that turns body rejections into the crate's JSON error
/// envelope instead of axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.to_string()))?;

        Ok(ApiJson(value))
    }
}
