//! Error types for actuator operations.
//!
//! These errors are internal to `springcheck-actuator` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for actuator operations.
pub type ActuatorResult<T> = Result<T, ActuatorError>;

/// Errors related to actuator requests.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// The actuator returned a body that is not a health tree.
    #[error("Invalid response from actuator: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
