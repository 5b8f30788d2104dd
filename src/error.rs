//! Error types for Timbro
//!
//! Centralized error handling using thiserror. Field validation failures are
//! not errors: they are returned as data (`ValidationResult`).

use thiserror::Error;

/// All error types that can occur in Timbro
#[derive(Debug, Error)]
pub enum TimbroError {
    /// Invalid coordinator state transition or operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A unit without the input capability asked for input
    #[error("Execution unit does not accept input requests")]
    InputNotSupported,

    /// A second input request was issued while one is still pending
    #[error("An input request is already pending")]
    InputPending,

    /// The caller abandoned a pending input request
    #[error("Input request channel closed before a value was supplied")]
    InputClosed,

    /// The event channel to the caller is gone
    #[error("Worker event channel closed")]
    ChannelClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Timbro operations
pub type Result<T> = std::result::Result<T, TimbroError>;
