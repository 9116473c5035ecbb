use axum::{Server, http::HeaderValue, middleware::from_fn};
use showcase_backend::{
    config::Config,
    error::{AppError, AppResult},
    middleware, routes,
};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::from_env()?;
    showcase_backend::init_tracing(&config);

    // CORS for the development frontend; "*" opens it up entirely
    let cors = if config.allow_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Config::validate has already rejected unparseable origins
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring malformed CORS origin {:?}", origin);
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = routes::create_router()
        .layer(cors)
        .layer(from_fn(middleware::logger::logger));

    let addr = config
        .server_address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;
    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(())
}
