//! Actuator client port trait.

use async_trait::async_trait;

use super::error::ActuatorPortResult;
use crate::domain::HealthReport;

/// Port trait for reading a Spring Boot actuator.
///
/// The implementation lives in `springcheck-actuator`. Implementations make
/// exactly one request per call and never retry.
#[async_trait]
pub trait ActuatorPort: Send + Sync {
    /// Fetch and parse the health endpoint.
    async fn fetch_health(&self) -> ActuatorPortResult<HealthReport>;
}
