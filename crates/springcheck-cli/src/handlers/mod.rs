//! Command handlers.

pub mod check;
