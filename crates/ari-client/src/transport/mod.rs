//! Transport layer for ARI requests
//!
//! The [`AriTransport`] trait is the only seam that crosses the process
//! boundary. The client encodes typed request bodies into JSON before handing
//! them to the transport, and decodes whatever JSON comes back into the typed
//! result of the operation. [`HttpTransport`] is the production
//! implementation; tests plug in an in-memory server.

pub mod http;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use http::HttpTransport;

/// HTTP method used by an ARI operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Upper-case method name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request against the ARI resource tree
#[derive(Debug, Clone, PartialEq)]
pub struct AriRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the ARI base URL, e.g. `/bridges/abc/addChannel`
    pub path: String,
    /// JSON body, if the operation sends one
    pub body: Option<Value>,
}

impl AriRequest {
    /// Create a request without a body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Performs one round trip against the ARI server
///
/// Implementations return `Ok(None)` when the server answered successfully
/// without a body, and an error for transport failures and non-success
/// statuses. No retries are expected at this layer.
#[async_trait]
pub trait AriTransport: Send + Sync {
    /// Execute the request and return the decoded JSON body, if any
    async fn execute(&self, request: AriRequest) -> Result<Option<Value>>;
}

#[async_trait]
impl<T: AriTransport + ?Sized> AriTransport for std::sync::Arc<T> {
    async fn execute(&self, request: AriRequest) -> Result<Option<Value>> {
        (**self).execute(request).await
    }
}
