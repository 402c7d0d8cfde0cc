//! HTTP transport over reqwest

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::{AriRequest, AriTransport, Method};
use crate::config::AriConfig;
use crate::error::{AriError, Result};

/// ARI transport that talks HTTP with basic authentication
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpTransport {
    /// Create a transport from a validated configuration
    pub fn new(config: &AriConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl AriTransport for HttpTransport {
    async fn execute(&self, request: AriRequest) -> Result<Option<Value>> {
        let AriRequest { method, path, body } = request;
        debug!(%method, %path, "Sending ARI request");

        let mut builder = self
            .client
            .request(to_reqwest(method), self.url(&path))
            .basic_auth(&self.username, Some(&self.password));
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%method, %path, status = status.as_u16(), "ARI response received");

        if !status.is_success() {
            warn!(%method, %path, status = status.as_u16(), "ARI request rejected: {}", text);
            return Err(AriError::Status {
                method,
                path,
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| AriError::Decode { path, source })
    }
}
