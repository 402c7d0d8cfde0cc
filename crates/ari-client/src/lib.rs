//! # ARI Client - Bridge control over the Asterisk REST Interface
//!
//! This crate is the caller-side view of server-owned bridges. The server
//! does the media mixing; this crate creates, inspects and deletes bridges,
//! moves channels in and out of them, and starts music on hold, playback
//! and recording on them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rvoip_ari_client::{AddChannelRequest, AriClient, CallContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AriClient::builder()
//!         .base_url("http://localhost:8088/ari")
//!         .credentials("asterisk", "asterisk")
//!         .build()?;
//!
//!     let bridge = client.new_bridge().await?;
//!     client.add_channel(&bridge.id, &AddChannelRequest::new("chan-1")).await?;
//!
//!     // Hand the bridge to deeper layers without fetching it again
//!     let ctx = CallContext::new().with_bridge(bridge);
//!     if let Some(bridge) = ctx.bridge() {
//!         client.bridge_delete(&bridge.id).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`transport`]: the [`AriTransport`] seam and its reqwest implementation
//! - [`models`]: bridge, request and media shapes
//! - [`bridges`]: bridge operations on [`AriClient`]
//! - [`context`]: immutable call-scoped bridge attachments
//! - [`config`] and [`logging`]: ambient setup

#![warn(rust_2018_idioms)]

pub mod bridges;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod transport;

pub use client::{AriClient, AriClientBuilder};
pub use config::AriConfig;
pub use context::{
    BridgeSlot, CallContext, DEFAULT_BRIDGE_SLOT, bridge_from_context, bridge_from_context_named,
    with_bridge, with_bridge_named,
};
pub use error::{AriError, Result};
pub use models::{
    AddChannelRequest, Bridge, BridgeType, CreateBridgeRequest, LiveRecording, PlayMediaRequest,
    Playback, RecordRequest,
};
pub use transport::{AriRequest, AriTransport, HttpTransport, Method};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
