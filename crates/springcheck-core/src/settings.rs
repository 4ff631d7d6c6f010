//! Settings for a single check run.
//!
//! Adapters (the CLI) collect raw values and build `CheckSettings` here, so
//! validation rules live in one place.

use std::collections::BTreeSet;
use std::time::Duration;

use thiserror::Error;

use crate::policy::CheckPolicy;

/// Default actuator base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost/manage";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while validating settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Only one of username and password was given.
    #[error("<username> and <password> are required together.")]
    IncompleteCredentials,

    /// Timeout must be positive.
    #[error("<timeout> must be greater than zero.")]
    ZeroTimeout,
}

/// Basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Pair up optional username and password.
    ///
    /// Empty strings count as absent. Both absent yields `None`; exactly one
    /// present is an error.
    pub fn from_parts(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Option<Self>, SettingsError> {
        let username = username.filter(|u| !u.is_empty());
        let password = password.filter(|p| !p.is_empty());
        match (username, password) {
            (None, None) => Ok(None),
            (Some(username), Some(password)) => Ok(Some(Self { username, password })),
            _ => Err(SettingsError::IncompleteCredentials),
        }
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Validated settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    /// Actuator base URL; `/health` is appended to it
    pub base_url: String,
    /// Skip TLS certificate and hostname validation
    pub insecure: bool,
    /// Optional basic-auth credentials
    pub credentials: Option<Credentials>,
    /// Check only this service
    pub service: Option<String>,
    /// Services whose failure is tolerated in aggregate mode
    pub ignore_services: BTreeSet<String>,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            insecure: false,
            credentials: None,
            service: None,
            ignore_services: BTreeSet::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CheckSettings {
    /// Check invariants that cannot be expressed in the types.
    pub const fn validate(&self) -> Result<(), SettingsError> {
        if self.timeout.is_zero() {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }

    /// Decision policy derived from these settings.
    #[must_use]
    pub fn policy(&self) -> CheckPolicy {
        CheckPolicy::new()
            .with_service(self.service.clone())
            .with_ignore_services(self.ignore_services.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_both_absent() {
        assert_eq!(Credentials::from_parts(None, None), Ok(None));
        assert_eq!(
            Credentials::from_parts(Some(String::new()), Some(String::new())),
            Ok(None)
        );
    }

    #[test]
    fn test_credentials_both_present() {
        let creds = Credentials::from_parts(Some("admin".into()), Some("secret".into()))
            .unwrap()
            .unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_credentials_incomplete() {
        assert_eq!(
            Credentials::from_parts(Some("admin".into()), None),
            Err(SettingsError::IncompleteCredentials)
        );
        assert_eq!(
            Credentials::from_parts(Some(String::new()), Some("secret".into())),
            Err(SettingsError::IncompleteCredentials)
        );
    }

    #[test]
    fn test_incomplete_credentials_message() {
        assert_eq!(
            SettingsError::IncompleteCredentials.to_string(),
            "<username> and <password> are required together."
        );
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_defaults() {
        let settings = CheckSettings::default();
        assert_eq!(settings.base_url, "http://localhost/manage");
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert!(!settings.insecure);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let settings = CheckSettings {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroTimeout));
    }

    #[test]
    fn test_policy_from_settings() {
        let settings = CheckSettings {
            service: Some("db".into()),
            ignore_services: ["redis".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let policy = settings.policy();
        assert_eq!(policy.service.as_deref(), Some("db"));
        assert!(policy.ignore_services.contains("redis"));
    }
}
