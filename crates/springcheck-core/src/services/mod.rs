//! Services orchestrating ports and domain logic.

mod health_check;

pub use health_check::{HealthCheckError, HealthCheckService};
