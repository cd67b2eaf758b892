use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::schemas::AppState;

pub const INDEX_FILE: &str = "index.html";

/// Start-up failures of the dashboard host
#[derive(Error, Debug)]
pub enum ServeError {
    /// The bundle directory has no index.html to serve
    #[error("No dashboard bundle at {}: run `trunk build` in workspace/frontend first", .0.display())]
    MissingBundle(PathBuf),

    /// The listener could not be bound
    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// True when `dist_dir` holds an index.html
pub fn bundle_present(dist_dir: &Path) -> bool {
    dist_dir.join(INDEX_FILE).is_file()
}

/// Initialize application state for the given bundle directory
pub fn initialize_app_state(dist_dir: PathBuf) -> Result<AppState, ServeError> {
    if !bundle_present(&dist_dir) {
        return Err(ServeError::MissingBundle(dist_dir));
    }

    tracing::info!("Serving dashboard bundle from {}", dist_dir.display());
    Ok(AppState {
        dist_dir: Arc::new(dist_dir),
    })
}
