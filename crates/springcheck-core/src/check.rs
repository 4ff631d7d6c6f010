//! Check verdicts and the Nagios resource they are reported through.
//!
//! The decision policy produces a single [`Verdict`]. A finished run is a
//! [`CheckOutcome`], which becomes a `nagiosplugin::Resource` for printing:
//! the plugin crate picks the overall state and renders the status line and
//! performance data.

use nagiosplugin::{CheckResult, Metric, Resource, ServiceState};

/// Result every run starts with, before the actuator is consulted.
pub const BASELINE_MESSAGE: &str = "All (or some) lights are green :)";

/// Name of the Nagios resource.
pub const RESOURCE_NAME: &str = "SPRINGBOOT";

/// One decision: a state and the message explaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub state: ServiceState,
    pub message: String,
}

impl Verdict {
    pub fn new(state: ServiceState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(ServiceState::Ok, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(ServiceState::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ServiceState::Unknown, message)
    }
}

impl From<Verdict> for CheckResult {
    fn from(verdict: Verdict) -> Self {
        Self::new()
            .with_state(verdict.state)
            .with_message(verdict.message)
    }
}

/// Everything one run reports: the verdict and the service counts.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub verdict: Verdict,
    /// Services found in the health tree
    pub services: usize,
    /// Services not reporting `UP`
    pub services_down: usize,
}

impl CheckOutcome {
    pub const fn state(&self) -> ServiceState {
        self.verdict.state
    }

    /// Build the Nagios resource: the baseline OK result, the verdict and
    /// the `services` / `services_down` metrics.
    #[must_use]
    pub fn into_resource(self) -> Resource {
        Resource::new(RESOURCE_NAME)
            .with_result(CheckResult::from(Verdict::ok(BASELINE_MESSAGE)))
            .with_result(CheckResult::from(self.verdict))
            .with_result(Metric::new("services", perf_value(self.services)))
            .with_result(Metric::new("services_down", perf_value(self.services_down)))
    }
}

fn perf_value(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
