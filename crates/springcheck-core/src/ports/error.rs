//! Error types for actuator port operations.

use thiserror::Error;

/// Errors from actuator port operations.
///
/// Implementation-specific errors (HTTP, TLS, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ActuatorPortError {
    /// The actuator could not be reached or the transfer failed.
    #[error("Actuator unreachable: {message}")]
    Unreachable {
        /// Description of the transport failure
        message: String,
    },

    /// The actuator answered with something that is not a health tree.
    #[error("Invalid actuator response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The client could not be set up (bad URL, TLS backend).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for actuator port operations.
pub type ActuatorPortResult<T> = Result<T, ActuatorPortError>;
