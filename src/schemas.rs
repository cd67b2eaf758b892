use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the compiled frontend bundle
    pub dist_dir: Arc<PathBuf>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Whether the bundle's index.html is still on disk: "present" or "missing"
    pub bundle: String,
}
