//! Port trait implementation for `ActuatorClient`.
//!
//! Implements the core-owned `ActuatorPort` trait, converting internal errors
//! into core port errors.

use async_trait::async_trait;
use springcheck_core::HealthReport;
use springcheck_core::ports::{ActuatorPort, ActuatorPortError, ActuatorPortResult};

use crate::client::ActuatorClient;
use crate::error::ActuatorError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ActuatorError` to core `ActuatorPortError`.
fn map_error(err: ActuatorError) -> ActuatorPortError {
    match err {
        ActuatorError::Network(e) => {
            let message = if e.is_timeout() {
                format!("request timed out: {e}")
            } else {
                e.to_string()
            };
            ActuatorPortError::Unreachable { message }
        }
        ActuatorError::InvalidResponse { message } => {
            ActuatorPortError::InvalidResponse { message }
        }
        ActuatorError::JsonParse(e) => ActuatorPortError::InvalidResponse {
            message: e.to_string(),
        },
        ActuatorError::InvalidUrl(e) => ActuatorPortError::Configuration {
            message: e.to_string(),
        },
        ActuatorError::ClientBuild(e) => ActuatorPortError::Configuration {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ActuatorPort for ActuatorClient<B> {
    async fn fetch_health(&self) -> ActuatorPortResult<HealthReport> {
        self.health().await.map_err(map_error)
    }
}
