//! Client handle for an ARI server
//!
//! An [`AriClient`] is constructed once and passed by reference to every
//! caller that needs it. It holds nothing but its transport: there is no
//! cache and no cross-call state, so it can be shared freely between tasks
//! as long as the transport can.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::AriConfig;
use crate::error::{AriError, Result};
use crate::transport::{AriRequest, AriTransport, HttpTransport};

/// Handle for issuing ARI operations
#[derive(Debug, Clone)]
pub struct AriClient<T = HttpTransport> {
    transport: T,
}

impl AriClient<HttpTransport> {
    /// Create an HTTP client from a configuration
    pub fn new(config: AriConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(&config)?))
    }

    /// Create an HTTP client configured from `ARI_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(AriConfig::from_env()?)
    }

    /// Start building an HTTP client
    pub fn builder() -> AriClientBuilder {
        AriClientBuilder::new()
    }
}

impl<T: AriTransport> AriClient<T> {
    /// Wrap an arbitrary transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a request and decode its body into `R`
    ///
    /// A missing body is a decode failure, never a default value.
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, request: AriRequest) -> Result<R> {
        let path = request.path.clone();
        let body = self.transport.execute(request).await?;
        serde_json::from_value(body.unwrap_or(Value::Null))
            .map_err(|source| AriError::Decode { path, source })
    }

    /// Execute a request whose only result is success or failure
    pub(crate) async fn send(&self, request: AriRequest) -> Result<()> {
        self.transport.execute(request).await?;
        Ok(())
    }
}

/// Serialize a request body
pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(AriError::Encode)
}

/// Builder for an HTTP-backed [`AriClient`]
#[derive(Debug, Clone, Default)]
pub struct AriClientBuilder {
    config: AriConfig,
}

impl AriClientBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: AriConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the ARI base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the ARI user name and password
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.username = username.into();
        self.config.password = password.into();
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_micros().div_ceil(1000)).unwrap_or(u64::MAX);
        self.config.request_timeout_ms = millis;
        self
    }

    /// Get the configuration without building
    pub fn into_config(self) -> Result<AriConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the client
    pub fn build(self) -> Result<AriClient> {
        AriClient::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = AriClient::builder()
            .base_url("https://pbx.example.com/ari")
            .credentials("app", "secret")
            .request_timeout(Duration::from_secs(3))
            .into_config()
            .unwrap();

        assert_eq!(config.base_url, "https://pbx.example.com/ari");
        assert_eq!(config.username, "app");
        assert_eq!(config.password, "secret");
        assert_eq!(config.request_timeout_ms, 3000);
    }

    #[test]
    fn test_builder_validates() {
        let result = AriClient::builder().base_url("ftp://pbx").build();
        assert!(matches!(result, Err(AriError::Configuration { .. })));
    }

    #[test]
    fn test_request_timeout_rounds_up_to_whole_millis() {
        let config = AriClient::builder()
            .request_timeout(Duration::from_micros(500))
            .into_config()
            .unwrap();
        assert_eq!(config.request_timeout_ms, 1);

        let config = AriClient::builder()
            .request_timeout(Duration::from_micros(2_001))
            .into_config()
            .unwrap();
        assert_eq!(config.request_timeout_ms, 3);

        let config = AriClient::builder()
            .request_timeout(Duration::MAX)
            .into_config()
            .unwrap();
        assert_eq!(config.request_timeout_ms, u64::MAX);

        assert!(
            AriClient::builder()
                .request_timeout(Duration::ZERO)
                .into_config()
                .is_err()
        );
    }

    #[test]
    fn test_builder_builds_http_client() {
        let client = AriClient::builder()
            .base_url("http://127.0.0.1:8088/ari/")
            .build()
            .unwrap();
        assert_eq!(client.transport().base_url(), "http://127.0.0.1:8088/ari");
    }
}
