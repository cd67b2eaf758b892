use thiserror::Error;

/// Failure reported by a dashboard data provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataLoadError {
    /// The source could not be reached or refused the request
    #[error("Dashboard data unavailable: {0}")]
    Unavailable(String),
}

/// Type alias for Result with DataLoadError
pub type Result<T> = std::result::Result<T, DataLoadError>;
