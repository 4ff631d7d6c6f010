//! Health check service - runs one actuator check.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::check::CheckOutcome;
use crate::policy::CheckPolicy;
use crate::ports::{ActuatorPort, ActuatorPortError};

/// Why a check could not reach a verdict. Reported as UNKNOWN.
#[derive(Debug, Error)]
pub enum HealthCheckError {
    /// Transport failure or unusable client configuration.
    #[error("Couldn't fetch from actuator.")]
    Fetch(#[source] ActuatorPortError),

    /// The actuator answered with something that is not a health tree.
    #[error("Couldn't decode actuator response.")]
    Decode(#[source] ActuatorPortError),
}

impl From<ActuatorPortError> for HealthCheckError {
    fn from(err: ActuatorPortError) -> Self {
        match err {
            ActuatorPortError::Unreachable { .. } | ActuatorPortError::Configuration { .. } => {
                Self::Fetch(err)
            }
            ActuatorPortError::InvalidResponse { .. } => Self::Decode(err),
        }
    }
}

/// Service that fetches the actuator health and applies the decision policy.
pub struct HealthCheckService {
    actuator: Arc<dyn ActuatorPort>,
    policy: CheckPolicy,
}

impl HealthCheckService {
    /// Create a new health check service.
    pub fn new(actuator: Arc<dyn ActuatorPort>, policy: CheckPolicy) -> Self {
        Self { actuator, policy }
    }

    pub const fn policy(&self) -> &CheckPolicy {
        &self.policy
    }

    /// Run the check.
    pub async fn run(&self) -> Result<CheckOutcome, HealthCheckError> {
        let report = self
            .actuator
            .fetch_health()
            .await
            .inspect_err(|err| warn!(error = %err, "actuator check failed"))?;

        debug!(
            status = ?report.status,
            services = report.service_count(),
            down = ?report.down_services(),
            "actuator health parsed"
        );

        let verdict = self.policy.evaluate(&report);
        info!(state = ?verdict.state, message = %verdict.message, "check finished");

        Ok(CheckOutcome {
            verdict,
            services: report.service_count(),
            services_down: report.down_services().len(),
        })
    }
}
