//! Actuator client.
//!
//! Generic over the HTTP backend so tests can swap in a fake.

use tracing::debug;
use url::Url;

use springcheck_core::HealthReport;

use crate::config::ActuatorClientConfig;
use crate::endpoint::{HEALTH_PATH, build_health_url};
use crate::error::ActuatorResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::parsing::parse_health_body;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default actuator client using the reqwest HTTP backend.
pub type DefaultActuatorClient = ActuatorClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for one Spring Boot actuator.
///
/// Use `DefaultActuatorClient` in production code and talk to it through the
/// `ActuatorPort` trait.
pub struct ActuatorClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) health_url: Url,
}

impl DefaultActuatorClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL does not parse or the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ActuatorClientConfig) -> ActuatorResult<Self> {
        let health_url = build_health_url(&config.base_url, HEALTH_PATH)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            health_url,
        })
    }
}

impl<B: HttpBackend> ActuatorClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: &ActuatorClientConfig, backend: B) -> ActuatorResult<Self> {
        let health_url = build_health_url(&config.base_url, HEALTH_PATH)?;
        Ok(Self {
            backend,
            health_url,
        })
    }

    /// URL of the health endpoint this client queries.
    pub const fn health_url(&self) -> &Url {
        &self.health_url
    }

    /// Fetch and parse the health endpoint.
    pub async fn health(&self) -> ActuatorResult<HealthReport> {
        let response = self.backend.get(&self.health_url).await?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "actuator responded"
        );
        parse_health_body(&response.body)
    }
}
