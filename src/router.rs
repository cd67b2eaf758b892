use crate::config::INDEX_FILE;
use crate::handlers::health::health_check;
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router: health check plus the static bundle
///
/// Paths without a file fall back to index.html (status 200) so the
/// frontend router can resolve them.
pub fn create_router(state: AppState) -> Router {
    let index = state.dist_dir.join(INDEX_FILE);
    let bundle = ServeDir::new(state.dist_dir.as_path()).fallback(ServeFile::new(index));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Frontend bundle
        .fallback_service(bundle)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
