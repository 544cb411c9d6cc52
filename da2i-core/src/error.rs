/// Error types for the dashboard runtime
use thiserror::Error;

/// Main error type for dashboard runtime operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Failed to parse a JSON config document
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A config field holds a value the runtime cannot work with
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Type alias for Results using DashError
pub type Result<T> = std::result::Result<T, DashError>;
