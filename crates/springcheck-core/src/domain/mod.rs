//! Domain types for springcheck.
//!
//! Pure data types with no infrastructure dependencies.

mod health;

pub use health::{HealthReport, ServiceHealth, UP};
