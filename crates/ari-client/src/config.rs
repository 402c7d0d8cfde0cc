//! Configuration for the ARI client

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{AriError, Result};

/// Connection settings for an ARI server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AriConfig {
    /// Base URL of the REST interface, e.g. `http://pbx:8088/ari`
    pub base_url: String,
    /// ARI user name
    pub username: String,
    /// ARI password
    pub password: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for AriConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8088/ari".to_string(),
            username: "asterisk".to_string(),
            password: "asterisk".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl AriConfig {
    /// Load configuration from `ARI_*` environment variables
    ///
    /// `ARI_BASE_URL`, `ARI_USERNAME`, `ARI_PASSWORD` and
    /// `ARI_REQUEST_TIMEOUT_MS` override the defaults.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("ARI").try_parsing(true))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file (TOML, YAML or JSON by extension),
    /// with `ARI_*` environment variables taking precedence
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("ARI").try_parsing(true))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AriError::config(format!(
                "unsupported URL scheme '{}', expected http or https",
                url.scheme()
            )));
        }

        if self.username.is_empty() {
            return Err(AriError::config("ARI username is required"));
        }

        if self.request_timeout_ms == 0 {
            return Err(AriError::config("request timeout must be greater than zero"));
        }

        Ok(())
    }
}
