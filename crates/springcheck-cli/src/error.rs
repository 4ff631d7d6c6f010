//! CLI-specific error types.
//!
//! Every error ends the plugin run with UNKNOWN; the display text is what
//! Nagios shows.

use nagiosplugin::ServiceState;
use springcheck_actuator::ActuatorError;
use springcheck_core::SettingsError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings failed validation.
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// The actuator client could not be created (bad URL, TLS backend).
    #[error("Couldn't fetch from actuator.")]
    Client(#[from] ActuatorError),
}

/// Error handler for `nagiosplugin::Runner`: any failure is UNKNOWN.
pub fn unknown_state(err: anyhow::Error) -> (ServiceState, anyhow::Error) {
    (ServiceState::Unknown, err)
}
