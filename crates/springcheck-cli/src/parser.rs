//! Command-line parser.
//!
//! Option names match the long-standing `check_springboot` plugin so existing
//! Nagios command definitions keep working.

use clap::Parser;
use clap::error::ErrorKind;
use springcheck_core::DEFAULT_BASE_URL;

/// Nagios plugin checking a Spring Boot actuator health endpoint.
#[derive(Debug, Parser)]
#[command(name = "check_springboot")]
#[command(about = "Check a Spring Boot actuator health endpoint (Nagios plugin)")]
#[command(version)]
pub struct Cli {
    /// Springboot actuator baseurl
    #[arg(long = "baseurl", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Ignore TLS errors
    #[arg(long)]
    pub insecure: bool,

    /// Basic-Auth username
    #[arg(long, env = "SPRINGBOOT_USERNAME")]
    pub username: Option<String>,

    /// Basic-Auth password
    #[arg(long, env = "SPRINGBOOT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Check only the specified service
    #[arg(long, value_name = "NAME")]
    pub service: Option<String>,

    /// Ignore these services (comma separated, repeatable)
    #[arg(long = "ignore-services", value_name = "SERVICES", value_delimiter = ',')]
    pub ignore_services: Vec<String>,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Whether a parse error is really a help or version request.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Turn an argument error into a one-line plugin error.
///
/// clap exits with 2 on usage errors, which Nagios would read as CRITICAL.
pub fn usage_error(err: &clap::Error) -> anyhow::Error {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    let message = first_line.strip_prefix("error: ").unwrap_or(first_line).trim();
    anyhow::anyhow!("Invalid arguments: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["check_springboot"]);
        assert_eq!(cli.base_url, "http://localhost/manage");
        assert!(!cli.insecure);
        assert!(cli.service.is_none());
        assert!(cli.ignore_services.is_empty());
        assert_eq!(cli.timeout, 10);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::parse_from([
            "check_springboot",
            "--baseurl",
            "https://app.internal/actuator",
            "--insecure",
            "--username",
            "monitor",
            "--password",
            "secret",
            "--service",
            "db",
            "--timeout",
            "3",
            "-v",
        ]);
        assert_eq!(cli.base_url, "https://app.internal/actuator");
        assert!(cli.insecure);
        assert_eq!(cli.username.as_deref(), Some("monitor"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert_eq!(cli.service.as_deref(), Some("db"));
        assert_eq!(cli.timeout, 3);
        assert!(cli.verbose);
    }

    #[test]
    fn test_ignore_services_delimited_and_repeated() {
        let cli = Cli::parse_from([
            "check_springboot",
            "--ignore-services",
            "mail,redis",
            "--ignore-services=diskSpace",
        ]);
        assert_eq!(cli.ignore_services, vec!["mail", "redis", "diskSpace"]);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Cli::try_parse_from(["check_springboot", "--timeout", "0"]).unwrap_err();
        assert!(!is_informational(&err));
    }

    #[test]
    fn test_help_is_informational() {
        let err = Cli::try_parse_from(["check_springboot", "--help"]).unwrap_err();
        assert!(is_informational(&err));

        let err = Cli::try_parse_from(["check_springboot", "--version"]).unwrap_err();
        assert!(is_informational(&err));
    }

    #[test]
    fn test_usage_error_is_single_line() {
        let err = Cli::try_parse_from(["check_springboot", "--bogus"]).unwrap_err();
        let message = usage_error(&err).to_string();

        assert!(message.starts_with("Invalid arguments: "));
        assert!(message.contains("--bogus"));
        assert!(!message.contains('\n'));
    }
}
