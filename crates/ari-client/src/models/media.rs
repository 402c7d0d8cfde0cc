//! Playback and recording shapes shared by bridge and channel operations

use serde::{Deserialize, Serialize};

/// Media to play into a bridge or channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayMediaRequest {
    /// Media URI, e.g. `sound:tt-monkeys`; several may be comma-separated
    pub media: String,
    /// Language for the media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Milliseconds to skip before playing
    #[serde(rename = "offsetms", default, skip_serializing_if = "Option::is_none")]
    pub offset_ms: Option<u32>,
    /// Milliseconds to skip for forward/reverse operations
    #[serde(rename = "skipms", default, skip_serializing_if = "Option::is_none")]
    pub skip_ms: Option<u32>,
    /// Playback id to use instead of a server-generated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback_id: Option<String>,
}

impl PlayMediaRequest {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            ..Default::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_offset_ms(mut self, offset_ms: u32) -> Self {
        self.offset_ms = Some(offset_ms);
        self
    }

    pub fn with_skip_ms(mut self, skip_ms: u32) -> Self {
        self.skip_ms = Some(skip_ms);
        self
    }
}

/// Request to record a bridge or channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    /// Recording name
    pub name: String,
    /// File format, e.g. `wav`
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_silence_seconds: Option<u32>,
    /// `fail`, `overwrite` or `append`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_exists: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beep: Option<bool>,
    /// DTMF that ends the recording, `none`, `any` or a digit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminate_on: Option<String>,
}

impl RecordRequest {
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn with_max_duration(mut self, seconds: u32) -> Self {
        self.max_duration_seconds = Some(seconds);
        self
    }

    pub fn with_max_silence(mut self, seconds: u32) -> Self {
        self.max_silence_seconds = Some(seconds);
        self
    }

    pub fn with_if_exists(mut self, policy: impl Into<String>) -> Self {
        self.if_exists = Some(policy.into());
        self
    }

    pub fn with_beep(mut self, beep: bool) -> Self {
        self.beep = Some(beep);
        self
    }

    pub fn with_terminate_on(mut self, dtmf: impl Into<String>) -> Self {
        self.terminate_on = Some(dtmf.into());
        self
    }
}

/// An in-progress media playback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playback {
    pub id: String,
    pub media_uri: String,
    pub target_uri: String,
    pub language: String,
    /// queued, playing, complete, ...
    pub state: String,
}

/// An in-progress recording
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveRecording {
    pub name: String,
    pub format: String,
    pub target_uri: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}
