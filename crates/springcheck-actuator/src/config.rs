//! Public configuration for the actuator client.
//!
//! The core `CheckSettings` are mapped onto this builder at the composition
//! root; the client never reads settings itself.

use std::time::Duration;

use springcheck_core::{CheckSettings, Credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Configuration for the actuator client.
///
/// # Example
///
/// ```
/// use springcheck_actuator::ActuatorClientConfig;
/// use std::time::Duration;
///
/// let config = ActuatorClientConfig::new()
///     .with_base_url("https://app.example.com/actuator")
///     .with_timeout(Duration::from_secs(5))
///     .with_insecure(true);
/// ```
#[derive(Debug, Clone)]
pub struct ActuatorClientConfig {
    /// Base URL of the actuator
    pub(crate) base_url: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional basic-auth credentials
    pub(crate) credentials: Option<Credentials>,
    /// Accept invalid certificates and host names
    pub(crate) insecure: bool,
}

impl Default for ActuatorClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            credentials: None,
            insecure: false,
        }
    }
}

impl ActuatorClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a client configuration from validated check settings.
    #[must_use]
    pub fn from_settings(settings: &CheckSettings) -> Self {
        Self::new()
            .with_base_url(settings.base_url.clone())
            .with_timeout(settings.timeout)
            .with_optional_credentials(settings.credentials.clone())
            .with_insecure(settings.insecure)
    }

    /// Set the actuator base URL.
    ///
    /// Defaults to `http://localhost/manage`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set basic-auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    #[must_use]
    pub fn with_optional_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Skip TLS certificate and host name validation.
    #[must_use]
    pub const fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}
