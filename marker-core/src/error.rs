//! Error types for Marker

use thiserror::Error;

/// Result type alias for Marker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Marker operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed or empty caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// No usable JSON object could be located or parsed in agent output
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// A link could not be resolved into a complete repository descriptor
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Target path is occupied by something that is not a directory
    #[error("Conflict: {0}")]
    Conflict(String),

    /// git clone failed
    #[error("Clone failed: {0}")]
    Clone(String),

    /// Recursive directory removal failed
    #[error("Deletion failed: {0}")]
    Deletion(String),

    /// A repository metadata query failed
    #[error("Query failed: {0}")]
    Query(String),

    /// The review agent invocation failed
    #[error("Review failed: {0}")]
    Review(String),

    /// Agent execution error
    #[error("Agent error: {0}")]
    Agent(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
