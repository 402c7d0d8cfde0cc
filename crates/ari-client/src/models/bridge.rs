//! Bridge resource and its request shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A server-side bridge, the entity which merges media from one or more
/// channels into a common audio output
///
/// This is a point-in-time snapshot. `id` is the only stable identity;
/// every other field belongs to the server and may be stale after any
/// mutating call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bridge {
    /// Unique id of the bridge
    pub id: String,
    /// Human readable name, not unique
    pub name: String,
    /// Name of the bridging technology
    pub technology: String,
    /// Comma-separated capability list (mixing, holding, dtmf_events, proxy_media)
    pub bridge_type: String,
    /// Bridge class, passed through untouched
    #[serde(alias = "bridge")]
    pub bridge_class: String,
    /// Entity that created the bridge
    pub creator: String,
    /// Ids of the channels currently in the bridge
    pub channels: Vec<String>,
}

impl Bridge {
    /// Parse the bridge type field into its individual capabilities
    pub fn bridge_types(&self) -> Vec<BridgeType> {
        self.bridge_type
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(BridgeType::from)
            .collect()
    }

    /// Whether the snapshot lists the given channel as a member
    pub fn has_channel(&self, channel_id: &str) -> bool {
        self.channels.iter().any(|c| c == channel_id)
    }

    /// Whether two values denote the same remote bridge
    pub fn same_bridge(&self, other: &Bridge) -> bool {
        self.id == other.id
    }
}

/// Bridge capability classification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BridgeType {
    Mixing,
    Holding,
    DtmfEvents,
    ProxyMedia,
    /// Anything the server reports that is not listed above
    Other(String),
}

impl BridgeType {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            BridgeType::Mixing => "mixing",
            BridgeType::Holding => "holding",
            BridgeType::DtmfEvents => "dtmf_events",
            BridgeType::ProxyMedia => "proxy_media",
            BridgeType::Other(s) => s,
        }
    }
}

impl From<&str> for BridgeType {
    fn from(s: &str) -> Self {
        match s {
            "mixing" => BridgeType::Mixing,
            "holding" => BridgeType::Holding,
            "dtmf_events" => BridgeType::DtmfEvents,
            "proxy_media" => BridgeType::ProxyMedia,
            other => BridgeType::Other(other.to_string()),
        }
    }
}

impl FromStr for BridgeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BridgeType::from(s))
    }
}

impl fmt::Display for BridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body for creating or updating a bridge
///
/// Nothing is required, so an empty request is valid. Unset fields are left
/// out of the payload and take the server's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBridgeRequest {
    /// Caller-chosen bridge id
    #[serde(rename = "bridgeId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Comma-separated bridge type list
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub bridge_type: Option<String>,
    /// Bridge name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateBridgeRequest {
    /// Empty request, all server defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bridge id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the bridge name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a single bridge type
    pub fn with_type(mut self, bridge_type: BridgeType) -> Self {
        self.bridge_type = Some(bridge_type.as_str().to_string());
        self
    }

    /// Set several bridge types, joined the way the server expects
    pub fn with_types(mut self, types: &[BridgeType]) -> Self {
        let joined = types
            .iter()
            .map(BridgeType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.bridge_type = Some(joined);
        self
    }
}

/// Body for adding channels to a bridge
///
/// `channel` may hold several comma-separated channel ids. The value is sent
/// as given; the client does not split or check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddChannelRequest {
    /// Channel id, or comma-separated ids
    #[serde(rename = "channel")]
    pub channel_id: String,
    /// Role of the channel in the bridge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AddChannelRequest {
    /// Add a single channel
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            role: None,
        }
    }

    /// Add several channels in one request
    pub fn for_channels<S: AsRef<str>>(channel_ids: &[S]) -> Self {
        let joined = channel_ids
            .iter()
            .map(|id| id.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        Self::new(joined)
    }

    /// Set the channel role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
