//! `check_springboot` entry point.
//!
//! Prints exactly one Nagios status line on stdout and exits with the
//! matching code. Every failure is reported as UNKNOWN.

use clap::Parser;
use nagiosplugin::Runner;
use springcheck_cli::{Cli, handlers, logging, parser, unknown_state, usage_error};
use springcheck_core::CheckOutcome;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let outcome = run().await;
    Runner::new()
        .on_error(unknown_state)
        .safe_run(move || outcome.map(CheckOutcome::into_resource))
        .print_and_exit()
}

async fn run() -> anyhow::Result<CheckOutcome> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout with exit code 0
        Err(err) if parser::is_informational(&err) => err.exit(),
        Err(err) => {
            eprint!("{err}");
            return Err(usage_error(&err));
        }
    };

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{e}");
    }

    handlers::check::execute(&cli).await
}
