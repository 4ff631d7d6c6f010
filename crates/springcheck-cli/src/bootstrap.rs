//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into validated core settings and wires the reqwest
//! actuator client into the health check service.

use std::sync::Arc;
use std::time::Duration;

use springcheck_actuator::{ActuatorClientConfig, DefaultActuatorClient};
use springcheck_core::{CheckSettings, Credentials, HealthCheckService};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Everything a command handler needs.
pub struct CliContext {
    pub service: HealthCheckService,
}

/// Build validated settings from parsed arguments.
pub fn settings_from_cli(cli: &Cli) -> Result<CheckSettings, CliError> {
    let credentials = Credentials::from_parts(cli.username.clone(), cli.password.clone())?;

    let settings = CheckSettings {
        base_url: cli.base_url.trim().to_string(),
        insecure: cli.insecure,
        credentials,
        service: cli
            .service
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        ignore_services: cli
            .ignore_services
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        timeout: Duration::from_secs(cli.timeout),
    };
    settings.validate()?;
    Ok(settings)
}

/// Wire the check service from parsed arguments.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let settings = settings_from_cli(cli)?;
    debug!(?settings, "check settings");

    let client = DefaultActuatorClient::new(&ActuatorClientConfig::from_settings(&settings))
        .inspect_err(|e| tracing::warn!(error = %e, "failed to create actuator client"))?;
    debug!(url = %client.health_url(), "actuator client ready");

    let service = HealthCheckService::new(Arc::new(client), settings.policy());
    Ok(CliContext { service })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use springcheck_core::SettingsError;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("check_springboot").chain(args.iter().copied()))
    }

    #[test]
    fn test_settings_defaults() {
        let settings = settings_from_cli(&parse(&["--username", "", "--password", ""])).unwrap();
        assert_eq!(settings.base_url, "http://localhost/manage");
        assert!(settings.credentials.is_none());
        assert!(settings.service.is_none());
        assert!(settings.ignore_services.is_empty());
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_settings_with_credentials() {
        let settings =
            settings_from_cli(&parse(&["--username", "monitor", "--password", "pw"])).unwrap();
        let creds = settings.credentials.unwrap();
        assert_eq!(creds.username, "monitor");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_username_without_password() {
        let result = settings_from_cli(&parse(&["--username", "monitor", "--password", ""]));
        assert!(matches!(
            result,
            Err(CliError::Settings(SettingsError::IncompleteCredentials))
        ));
    }

    #[test]
    fn test_blank_service_and_ignores_dropped() {
        let settings = settings_from_cli(&parse(&[
            "--username",
            "",
            "--password",
            "",
            "--service",
            " ",
            "--ignore-services",
            "redis,, mail ,",
        ]))
        .unwrap();
        assert!(settings.service.is_none());
        let ignored: Vec<&str> = settings.ignore_services.iter().map(String::as_str).collect();
        assert_eq!(ignored, vec!["mail", "redis"]);
    }

    #[test]
    fn test_bootstrap_builds_service() {
        let ctx = bootstrap(&parse(&[
            "--baseurl",
            "https://app.internal/manage",
            "--username",
            "",
            "--password",
            "",
            "--service",
            "db",
        ]))
        .unwrap();
        assert_eq!(ctx.service.policy().service.as_deref(), Some("db"));
    }

    #[test]
    fn test_bootstrap_rejects_invalid_url() {
        let result = bootstrap(&parse(&[
            "--baseurl",
            "no-scheme/manage",
            "--username",
            "",
            "--password",
            "",
        ]));
        assert!(matches!(result, Err(CliError::Client(_))));
    }
}
