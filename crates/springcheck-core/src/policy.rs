//! Decision policy mapping a health report to a check result.

use std::collections::BTreeSet;

use crate::check::Verdict;
use crate::domain::HealthReport;

/// Which part of the health report decides the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckPolicy {
    /// Check only this service instead of the aggregate status.
    pub service: Option<String>,
    /// Services whose failure does not make the aggregate check critical.
    pub ignore_services: BTreeSet<String>,
}

impl CheckPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a single service. An empty name means "no service".
    #[must_use]
    pub fn with_service(mut self, service: Option<String>) -> Self {
        self.service = service.filter(|s| !s.is_empty());
        self
    }

    #[must_use]
    pub fn with_ignore_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_services = services.into_iter().map(Into::into).collect();
        self
    }

    /// Decide the outcome for `report`.
    #[must_use]
    pub fn evaluate(&self, report: &HealthReport) -> Verdict {
        match self.service.as_deref() {
            None => self.evaluate_aggregate(report),
            Some(service) => Self::evaluate_service(report, service),
        }
    }

    fn evaluate_aggregate(&self, report: &HealthReport) -> Verdict {
        if report.status.is_none() {
            return Verdict::unknown("Couldn't find status in actuator response.");
        }
        if report.is_up() {
            return Verdict::ok("Springboot actuator status is UP.");
        }

        let down = report.down_services();
        let message = format!("Services reported DOWN: {}", down.join(","));

        // Vacuously OK when the aggregate is down but no service is.
        if down.iter().all(|name| self.ignore_services.contains(*name)) {
            tracing::debug!(?down, "all down services are ignored");
            Verdict::ok(message)
        } else {
            Verdict::critical(message)
        }
    }

    fn evaluate_service(report: &HealthReport, service: &str) -> Verdict {
        match report.service(service) {
            None => Verdict::unknown(format!("Springboot service {service} was not found.")),
            Some(health) if health.is_up() => {
                Verdict::ok(format!("Springboot service {service} status is UP."))
            }
            Some(_) => {
                Verdict::critical(format!("Springboot service {service} status is DOWN."))
            }
        }
    }
}
