//! Health report types.
//!
//! These types cross the boundary between `springcheck-actuator` and the core.
//! They hold only what the decision policy needs, not the raw actuator JSON.

use serde::{Deserialize, Serialize};

/// Status string Spring Boot uses for a healthy component.
pub const UP: &str = "UP";

/// Status of a single named service in the health tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Key of the service in the health tree (e.g. `db`, `diskSpace`)
    pub name: String,
    /// Reported status, `None` when the entry had no string status
    pub status: Option<String>,
}

impl ServiceHealth {
    /// Create a service entry with a status.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Some(status.into()),
        }
    }

    /// Whether the service reports exactly `UP`.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.status.as_deref() == Some(UP)
    }
}

/// Parsed actuator health response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Top-level aggregate status, `None` when missing or not a string
    pub status: Option<String>,
    /// Services found in the tree, sorted by name
    #[serde(default)]
    pub services: Vec<ServiceHealth>,
}

impl HealthReport {
    /// Build a report, sorting services by name.
    pub fn new(status: Option<String>, mut services: Vec<ServiceHealth>) -> Self {
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Self { status, services }
    }

    /// Whether the aggregate status is exactly `UP`.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.status.as_deref() == Some(UP)
    }

    /// Look up a service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&ServiceHealth> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Names of all services that are not `UP`, in name order.
    #[must_use]
    pub fn down_services(&self) -> Vec<&str> {
        self.services
            .iter()
            .filter(|s| !s.is_up())
            .map(|s| s.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}
