use anyhow::Result;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{ServeError, initialize_app_state};
use crate::router::create_router;

pub async fn serve(dist_dir: PathBuf, bind_address: &str) -> Result<()> {
    trace!("Entering serve function");
    info!("Cash Flow Dashboard host starting up");
    debug!("Bundle directory: {}", dist_dir.display());
    debug!("Bind address: {}", bind_address);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(dist_dir) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e.into());
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(source) => {
            let e = ServeError::Bind {
                address: bind_address.to_string(),
                source,
            };
            error!("{}", e);
            return Err(e.into());
        }
    };

    info!("Dashboard available on http://{}", bind_address);
    debug!("Server is ready to accept connections");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
