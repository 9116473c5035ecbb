use axum::{http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Logs one line per request with a fresh trace id. The id is stored in
/// the request extensions so handlers can pick it up if they need it.
pub async fn logger<B>(mut req: Request<B>, next: Next<B>) -> Response {
    let trace_id = Uuid::new_v4();
    req.extensions_mut().insert(trace_id);

    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        trace_id = %trace_id,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request handled"
    );
    response
}
