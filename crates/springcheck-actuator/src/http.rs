//! HTTP backend abstraction for the actuator.
//!
//! This module provides a trait-based HTTP backend so the client can be
//! tested without a network. The production implementation uses reqwest and
//! makes exactly one request per call.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use crate::config::ActuatorClientConfig;
use crate::error::{ActuatorError, ActuatorResult};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("springcheck/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for HTTP backends that can GET a URL.
///
/// This is an implementation detail - external code should use the
/// `ActuatorPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET the URL and return the response regardless of its status code.
    async fn get(&self, url: &Url) -> ActuatorResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    config: ActuatorClientConfig,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ActuatorClientConfig) -> ActuatorResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers);

        if config.insecure {
            // With rustls this also skips the host name check
            warn!("TLS certificate validation disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(ActuatorError::ClientBuild)?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build a request with optional basic authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let request = self.client.get(url.as_str());
        match self.config.credentials {
            Some(ref creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url) -> ActuatorResult<HttpResponse> {
        debug!(
            %url,
            authenticated = self.config.credentials.is_some(),
            "requesting actuator health"
        );

        let response = self.build_request(url).send().await?;
        let status = response.status();

        // Spring Boot answers 503 with a JSON body when DOWN; the body decides.
        if !status.is_success() {
            debug!(%status, %url, "actuator returned non-success status");
        }

        let body = response.text().await?;
        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
