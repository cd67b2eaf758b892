use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::config::bundle_present;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle = if bundle_present(&state.dist_dir) {
        "present"
    } else {
        "missing"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bundle: bundle.to_string(),
    })
}
