//! Bridge operations
//!
//! Each operation composes a method, a path under `/bridges` and an optional
//! body, hands them to the transport and maps the answer to a typed value.
//! Nothing is cached or validated locally; the server is the authority on
//! bridge state.
//!
//! Path segments (bridge ids, playback ids) are concatenated verbatim.
//! Callers must not pass ids containing `/`.
//!
//! # Example
//!
//! ```rust,no_run
//! use rvoip_ari_client::{AddChannelRequest, AriClient};
//!
//! # async fn demo(client: &AriClient) -> rvoip_ari_client::Result<()> {
//! let bridge = client.new_bridge().await?;
//! client.add_channel(&bridge.id, &AddChannelRequest::new("chan-1")).await?;
//! client.play_music_on_hold(&bridge.id, "").await?;
//! client.bridge_delete(&bridge.id).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::client::{AriClient, encode};
use crate::error::Result;
use crate::models::{
    AddChannelRequest, Bridge, CreateBridgeRequest, LiveRecording, PlayMediaRequest, Playback,
    RecordRequest,
};
use crate::transport::{AriRequest, AriTransport, Method};

const BRIDGES_ROOT: &str = "/bridges";

/// Logical bridge operation and the wire call it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BridgeRoute<'a> {
    List,
    Create,
    Upsert(&'a str),
    Get(&'a str),
    AddChannel(&'a str),
    RemoveChannel(&'a str),
    StartMoh(&'a str),
    Play(&'a str),
    PlayWithId(&'a str, &'a str),
    Record(&'a str),
    Delete(&'a str),
    StopMoh(&'a str),
}

impl BridgeRoute<'_> {
    pub(crate) fn method(&self) -> Method {
        match self {
            BridgeRoute::List | BridgeRoute::Get(_) => Method::Get,
            BridgeRoute::Delete(_) | BridgeRoute::StopMoh(_) => Method::Delete,
            _ => Method::Post,
        }
    }

    pub(crate) fn path(&self) -> String {
        match *self {
            BridgeRoute::List | BridgeRoute::Create => BRIDGES_ROOT.to_string(),
            BridgeRoute::Upsert(id) | BridgeRoute::Get(id) | BridgeRoute::Delete(id) => {
                format!("{}/{}", BRIDGES_ROOT, id)
            }
            BridgeRoute::AddChannel(id) => format!("{}/{}/addChannel", BRIDGES_ROOT, id),
            BridgeRoute::RemoveChannel(id) => format!("{}/{}/removeChannel", BRIDGES_ROOT, id),
            BridgeRoute::StartMoh(id) | BridgeRoute::StopMoh(id) => {
                format!("{}/{}/moh", BRIDGES_ROOT, id)
            }
            BridgeRoute::Play(id) => format!("{}/{}/play", BRIDGES_ROOT, id),
            BridgeRoute::PlayWithId(id, playback_id) => {
                format!("{}/{}/play/{}", BRIDGES_ROOT, id, playback_id)
            }
            BridgeRoute::Record(id) => format!("{}/{}/record", BRIDGES_ROOT, id),
        }
    }

    fn request(&self) -> AriRequest {
        AriRequest::new(self.method(), self.path())
    }

    fn request_with<B: Serialize>(&self, body: &B) -> Result<AriRequest> {
        Ok(self.request().with_body(encode(body)?))
    }
}

/// Body for removing a single channel from a bridge
#[derive(Debug, Serialize)]
struct RemoveChannelBody<'a> {
    channel: &'a str,
}

/// Body for starting music on hold; an absent class means the server default
#[derive(Debug, Serialize)]
struct MusicOnHoldBody<'a> {
    #[serde(rename = "mohClass", skip_serializing_if = "Option::is_none")]
    moh_class: Option<&'a str>,
}

impl<T: AriTransport> AriClient<T> {
    /// List all active bridges
    pub async fn list_bridges(&self) -> Result<Vec<Bridge>> {
        self.fetch(BridgeRoute::List.request()).await
    }

    /// Create a bridge, with a server-assigned id unless `req.id` is set
    ///
    /// A duplicate id is rejected by the server and surfaces as a status
    /// error.
    pub async fn create_bridge(&self, req: &CreateBridgeRequest) -> Result<Bridge> {
        let bridge: Bridge = self.fetch(BridgeRoute::Create.request_with(req)?).await?;
        info!("Created bridge {}", bridge.id);
        Ok(bridge)
    }

    /// Create the bridge `id`, or update it in place if it already exists
    pub async fn upsert_bridge(&self, id: &str, req: &CreateBridgeRequest) -> Result<Bridge> {
        let bridge: Bridge = self.fetch(BridgeRoute::Upsert(id).request_with(req)?).await?;
        info!("Upserted bridge {}", bridge.id);
        Ok(bridge)
    }

    /// Create a bridge under a freshly generated id with default options
    pub async fn new_bridge(&self) -> Result<Bridge> {
        self.new_bridge_with(CreateBridgeRequest::new()).await
    }

    /// Create a bridge under a freshly generated id
    ///
    /// Any id already present in `req` is replaced by the generated one, so
    /// the path and the body always agree.
    pub async fn new_bridge_with(&self, req: CreateBridgeRequest) -> Result<Bridge> {
        let id = Uuid::new_v4().to_string();
        let req = req.with_id(id.clone());
        self.upsert_bridge(&id, &req).await
    }

    /// Fetch the current state of a bridge
    pub async fn get_bridge(&self, id: &str) -> Result<Bridge> {
        self.fetch(BridgeRoute::Get(id).request()).await
    }

    /// Add one or more channels to a bridge
    pub async fn add_channel(&self, id: &str, req: &AddChannelRequest) -> Result<()> {
        self.send(BridgeRoute::AddChannel(id).request_with(req)?).await
    }

    /// Remove a channel from a bridge; it resumes whatever it was doing
    /// before it joined
    pub async fn remove_channel(&self, id: &str, channel_id: &str) -> Result<()> {
        let body = RemoveChannelBody { channel: channel_id };
        self.send(BridgeRoute::RemoveChannel(id).request_with(&body)?).await
    }

    /// Play music on hold to a bridge, or switch the class that is playing
    ///
    /// An empty `moh_class` uses the server's default class.
    pub async fn play_music_on_hold(&self, id: &str, moh_class: &str) -> Result<()> {
        let body = MusicOnHoldBody {
            moh_class: Some(moh_class).filter(|c| !c.is_empty()),
        };
        self.send(BridgeRoute::StartMoh(id).request_with(&body)?).await
    }

    /// Start playing media into a bridge
    pub async fn play_to_bridge(&self, id: &str, req: &PlayMediaRequest) -> Result<Playback> {
        self.fetch(BridgeRoute::Play(id).request_with(req)?).await
    }

    /// Start playing media into a bridge under a caller-chosen playback id
    pub async fn play_to_bridge_by_id(
        &self,
        id: &str,
        playback_id: &str,
        req: &PlayMediaRequest,
    ) -> Result<Playback> {
        let request = BridgeRoute::PlayWithId(id, playback_id).request_with(req)?;
        self.fetch(request).await
    }

    /// Start recording the mixed audio of a bridge
    pub async fn record_bridge(&self, id: &str, req: &RecordRequest) -> Result<LiveRecording> {
        self.fetch(BridgeRoute::Record(id).request_with(req)?).await
    }

    /// Shut down a bridge
    ///
    /// Member channels are released back to what they were doing, not
    /// hung up.
    pub async fn bridge_delete(&self, id: &str) -> Result<()> {
        self.send(BridgeRoute::Delete(id).request()).await?;
        info!("Deleted bridge {}", id);
        Ok(())
    }

    /// Stop music on hold started with [`play_music_on_hold`](Self::play_music_on_hold)
    pub async fn bridge_stop_moh(&self, id: &str) -> Result<()> {
        self.send(BridgeRoute::StopMoh(id).request()).await
    }
}
