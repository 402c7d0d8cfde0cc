//! Resource model for the ARI bridge API

pub mod bridge;
pub mod media;

pub use bridge::{AddChannelRequest, Bridge, BridgeType, CreateBridgeRequest};
pub use media::{LiveRecording, PlayMediaRequest, Playback, RecordRequest};
