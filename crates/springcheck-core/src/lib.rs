#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod check;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use check::{BASELINE_MESSAGE, CheckOutcome, Verdict};
pub use domain::{HealthReport, ServiceHealth};
pub use nagiosplugin::ServiceState;
pub use policy::CheckPolicy;
pub use ports::{ActuatorPort, ActuatorPortError, ActuatorPortResult};
pub use services::{HealthCheckError, HealthCheckService};
pub use settings::{
    CheckSettings, Credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SettingsError,
};
