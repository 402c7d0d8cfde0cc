//! In-memory ARI server used by the integration tests

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use rvoip_ari_client::{
    AddChannelRequest, AriError, AriRequest, AriTransport, Bridge, CreateBridgeRequest,
    LiveRecording, Method, PlayMediaRequest, Playback, RecordRequest, Result,
};

#[derive(Default)]
struct FakeState {
    bridges: BTreeMap<String, Bridge>,
    seen_ids: HashSet<String>,
    moh: HashMap<String, Option<String>>,
    requests: Vec<AriRequest>,
    next_id: u32,
}

/// Fake ARI server that keeps bridges in memory and answers like Asterisk
#[derive(Default)]
pub struct FakeAri {
    state: Mutex<FakeState>,
}

impl FakeAri {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received, in order
    pub fn requests(&self) -> Vec<AriRequest> {
        self.state.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<AriRequest> {
        self.state.lock().requests.last().cloned()
    }

    /// Every bridge id this server has ever allocated
    pub fn seen_ids(&self) -> HashSet<String> {
        self.state.lock().seen_ids.clone()
    }

    /// Music on hold state: `None` when not playing, `Some(class)` otherwise
    pub fn moh_class(&self, bridge_id: &str) -> Option<Option<String>> {
        self.state.lock().moh.get(bridge_id).cloned()
    }

    fn handle(&self, request: AriRequest) -> Result<Option<Value>> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.requests.push(request.clone());

        let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();
        let body = request.body.clone().unwrap_or_else(|| json!({}));

        match (request.method, segments.as_slice()) {
            (Method::Get, ["bridges"]) => {
                let list: Vec<&Bridge> = state.bridges.values().collect();
                Ok(Some(json!(list)))
            }
            (Method::Post, ["bridges"]) => {
                let req: CreateBridgeRequest = decode(&request, body)?;
                let id = match req.id.clone() {
                    Some(id) => id,
                    None => {
                        state.next_id += 1;
                        format!("srv-{}", state.next_id)
                    }
                };
                if state.bridges.contains_key(&id) {
                    return Err(status(&request, 409, "Bridge with this id already exists"));
                }
                let bridge = new_bridge(&id, &req);
                state.seen_ids.insert(id.clone());
                state.bridges.insert(id, bridge.clone());
                Ok(Some(json!(bridge)))
            }
            (Method::Post, ["bridges", id]) => {
                let req: CreateBridgeRequest = decode(&request, body)?;
                let id = id.to_string();
                let bridge = match state.bridges.get_mut(&id) {
                    Some(existing) => {
                        if let Some(name) = &req.name {
                            existing.name = name.clone();
                        }
                        if let Some(bridge_type) = &req.bridge_type {
                            existing.bridge_type = bridge_type.clone();
                        }
                        existing.clone()
                    }
                    None => {
                        let bridge = new_bridge(&id, &req);
                        state.seen_ids.insert(id.clone());
                        state.bridges.insert(id, bridge.clone());
                        bridge
                    }
                };
                Ok(Some(json!(bridge)))
            }
            (Method::Get, ["bridges", id]) => match state.bridges.get(*id) {
                Some(bridge) => Ok(Some(json!(bridge))),
                None => Err(status(&request, 404, "Bridge not found")),
            },
            (Method::Delete, ["bridges", id]) => match state.bridges.remove(*id) {
                Some(_) => {
                    state.moh.remove(*id);
                    Ok(None)
                }
                None => Err(status(&request, 404, "Bridge not found")),
            },
            (Method::Post, ["bridges", id, "addChannel"]) => {
                let req: AddChannelRequest = decode(&request, body)?;
                let Some(bridge) = state.bridges.get_mut(*id) else {
                    return Err(status(&request, 404, "Bridge not found"));
                };
                for channel in req.channel_id.split(',') {
                    if !bridge.has_channel(channel) {
                        bridge.channels.push(channel.to_string());
                    }
                }
                Ok(None)
            }
            (Method::Post, ["bridges", id, "removeChannel"]) => {
                let channel = body
                    .get("channel")
                    .and_then(Value::as_str)
                    .ok_or_else(|| status(&request, 400, "channel is required"))?
                    .to_string();
                let Some(bridge) = state.bridges.get_mut(*id) else {
                    return Err(status(&request, 404, "Bridge not found"));
                };
                if !bridge.has_channel(&channel) {
                    return Err(status(&request, 422, "Channel not in this bridge"));
                }
                bridge.channels.retain(|c| c != &channel);
                Ok(None)
            }
            (Method::Post, ["bridges", id, "moh"]) => {
                if !state.bridges.contains_key(*id) {
                    return Err(status(&request, 404, "Bridge not found"));
                }
                let class = body
                    .get("mohClass")
                    .and_then(Value::as_str)
                    .unwrap_or("default");
                state.moh.insert(id.to_string(), Some(class.to_string()));
                Ok(None)
            }
            (Method::Delete, ["bridges", id, "moh"]) => {
                if !state.bridges.contains_key(*id) {
                    return Err(status(&request, 404, "Bridge not found"));
                }
                state.moh.insert(id.to_string(), None);
                Ok(None)
            }
            (Method::Post, ["bridges", id, "play"]) => {
                let req: PlayMediaRequest = decode(&request, body)?;
                state.next_id += 1;
                let playback_id = format!("pb-{}", state.next_id);
                playback(&*state, &request, id, &playback_id, &req)
            }
            (Method::Post, ["bridges", id, "play", playback_id]) => {
                let req: PlayMediaRequest = decode(&request, body)?;
                playback(&*state, &request, id, playback_id, &req)
            }
            (Method::Post, ["bridges", id, "record"]) => {
                let req: RecordRequest = decode(&request, body)?;
                if !state.bridges.contains_key(*id) {
                    return Err(status(&request, 404, "Bridge not found"));
                }
                let recording = LiveRecording {
                    name: req.name,
                    format: req.format,
                    target_uri: format!("bridge:{}", id),
                    state: "recording".to_string(),
                    ..Default::default()
                };
                Ok(Some(json!(recording)))
            }
            _ => Err(status(&request, 404, "Resource not found")),
        }
    }
}

#[async_trait]
impl AriTransport for FakeAri {
    async fn execute(&self, request: AriRequest) -> Result<Option<Value>> {
        self.handle(request)
    }
}

/// Transport that rejects every request with the given status
pub struct RejectingTransport(pub u16);

#[async_trait]
impl AriTransport for RejectingTransport {
    async fn execute(&self, request: AriRequest) -> Result<Option<Value>> {
        Err(status(&request, self.0, "rejected"))
    }
}

/// Transport that succeeds without ever returning a body
pub struct EmptyTransport;

#[async_trait]
impl AriTransport for EmptyTransport {
    async fn execute(&self, _request: AriRequest) -> Result<Option<Value>> {
        Ok(None)
    }
}

fn new_bridge(id: &str, req: &CreateBridgeRequest) -> Bridge {
    Bridge {
        id: id.to_string(),
        name: req.name.clone().unwrap_or_default(),
        technology: "simple_bridge".to_string(),
        bridge_type: req.bridge_type.clone().unwrap_or_else(|| "mixing".to_string()),
        bridge_class: "stasis".to_string(),
        creator: "Stasis".to_string(),
        channels: Vec::new(),
    }
}

fn playback(
    state: &FakeState,
    request: &AriRequest,
    bridge_id: &str,
    playback_id: &str,
    req: &PlayMediaRequest,
) -> Result<Option<Value>> {
    if !state.bridges.contains_key(bridge_id) {
        return Err(status(request, 404, "Bridge not found"));
    }
    let playback = Playback {
        id: playback_id.to_string(),
        media_uri: req.media.clone(),
        target_uri: format!("bridge:{}", bridge_id),
        language: req.lang.clone().unwrap_or_else(|| "en".to_string()),
        state: "queued".to_string(),
    };
    Ok(Some(json!(playback)))
}

fn decode<T: serde::de::DeserializeOwned>(request: &AriRequest, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| status(request, 400, &e.to_string()))
}

fn status(request: &AriRequest, status: u16, message: &str) -> AriError {
    AriError::Status {
        method: request.method,
        path: request.path.clone(),
        status,
        body: json!({ "message": message }).to_string(),
    }
}
