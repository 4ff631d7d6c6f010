#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultActuatorClient exposes the generic client; the backend type is an
// implementation detail reached only through the ActuatorPort trait
#![allow(private_interfaces)]

mod client;
mod config;
mod endpoint;
mod error;
mod http;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultActuatorClient;

// Configuration
pub use config::ActuatorClientConfig;

// Errors
pub use error::{ActuatorError, ActuatorResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
