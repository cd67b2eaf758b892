use crate::config::{INDEX_FILE, initialize_app_state};
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const TEST_INDEX: &str = "<!DOCTYPE html><html><head><title>Cash Flow Dashboard - Forecasting Tool</title></head><body></body></html>";
pub const TEST_SCRIPT: &str = "console.log('dashboard');";

/// Create a throwaway bundle directory with index.html and one asset.
///
/// The directory is removed when the returned handle is dropped.
pub fn setup_test_bundle() -> TempDir {
    let dir = tempfile::Builder::new()
        .prefix("cashflow-bundle-")
        .tempdir()
        .expect("Failed to create bundle directory");
    std::fs::create_dir_all(dir.path().join("assets")).expect("Failed to create assets directory");
    std::fs::write(dir.path().join(INDEX_FILE), TEST_INDEX).expect("Failed to write index.html");
    std::fs::write(dir.path().join("assets").join("app.js"), TEST_SCRIPT).expect("Failed to write asset");
    dir
}

/// Create AppState for testing; keep the bundle handle alive for the test's duration
pub fn setup_test_app_state() -> (AppState, TempDir) {
    let bundle = setup_test_bundle();
    let state = initialize_app_state(bundle.path().to_path_buf()).expect("Test bundle should be valid");
    (state, bundle)
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing, returning its state and bundle directory alongside
pub fn setup_test_app() -> (Router, AppState, TempDir) {
    let _guard = init_test_tracing();

    let (state, bundle) = setup_test_app_state();
    let router = create_router(state.clone());
    (router, state, bundle)
}
