//! Run the actuator health check.

use springcheck_core::CheckOutcome;

use crate::bootstrap::bootstrap;
use crate::parser::Cli;

/// Execute one check. Setup and actuator failures are returned as errors.
pub async fn execute(cli: &Cli) -> anyhow::Result<CheckOutcome> {
    let ctx = bootstrap(cli)?;
    let outcome = ctx.service.run().await?;
    Ok(outcome)
}
