//! Call-scoped context carrying resolved bridges
//!
//! A [`CallContext`] lets one layer of an application hand "the current
//! bridge" to the layers below it without fetching it again. Contexts are
//! immutable: attaching a bridge returns a new context that points at the
//! old one, and the old one is left as it was. Cloning is a reference-count
//! bump, so contexts can be passed by value and shared across tasks.
//!
//! Bridges are stored in named slots. [`BridgeSlot::Default`] is used when
//! only one bridge matters; [`BridgeSlot::Peer`] and [`BridgeSlot::Named`]
//! let several bridges travel together, e.g. the bridge being built and a
//! peer bridge being joined.
//!
//! ```rust
//! use rvoip_ari_client::{Bridge, BridgeSlot, CallContext};
//!
//! let root = CallContext::new();
//! let bridge = Bridge { id: "b-1".into(), ..Default::default() };
//! let ctx = root.with_bridge(bridge);
//!
//! assert_eq!(ctx.bridge().map(|b| b.id.as_str()), Some("b-1"));
//! assert!(root.bridge().is_none());
//! assert!(ctx.bridge_in(&BridgeSlot::Peer).is_none());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::models::Bridge;

/// Name of the slot used when callers do not pick one
pub const DEFAULT_BRIDGE_SLOT: &str = "_default";

/// Slot under which a bridge is attached to a [`CallContext`]
///
/// Slots compare and hash by name, so `Named("peer")` and `Peer` are the
/// same slot.
#[derive(Debug, Clone)]
pub enum BridgeSlot {
    /// The bridge of the current call
    Default,
    /// A second bridge the current call is being joined with
    Peer,
    /// Any other caller-chosen name
    Named(Cow<'static, str>),
}

impl BridgeSlot {
    /// Slot for an arbitrary name
    ///
    /// `"_default"` and `"peer"` map to the fixed slots, so string-keyed
    /// callers and enum-keyed callers see the same attachments.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        if name == DEFAULT_BRIDGE_SLOT {
            BridgeSlot::Default
        } else if name == "peer" {
            BridgeSlot::Peer
        } else {
            BridgeSlot::Named(name)
        }
    }

    /// Name of the slot
    pub fn as_str(&self) -> &str {
        match self {
            BridgeSlot::Default => DEFAULT_BRIDGE_SLOT,
            BridgeSlot::Peer => "peer",
            BridgeSlot::Named(name) => name,
        }
    }
}

impl PartialEq for BridgeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for BridgeSlot {}

impl Hash for BridgeSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for BridgeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Entry {
    slot: BridgeSlot,
    bridge: Arc<Bridge>,
    parent: Option<Arc<Entry>>,
}

/// Immutable chain of bridge attachments scoped to one logical call
#[derive(Clone, Default)]
pub struct CallContext {
    head: Option<Arc<Entry>>,
}

impl CallContext {
    /// Empty root context
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context with `bridge` in the default slot
    pub fn with_bridge(&self, bridge: impl Into<Arc<Bridge>>) -> Self {
        self.with_bridge_in(BridgeSlot::Default, bridge)
    }

    /// Derive a context with `bridge` in the given slot
    ///
    /// An earlier attachment in the same slot is shadowed in the derived
    /// context only.
    pub fn with_bridge_in(&self, slot: BridgeSlot, bridge: impl Into<Arc<Bridge>>) -> Self {
        Self {
            head: Some(Arc::new(Entry {
                slot,
                bridge: bridge.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Bridge in the default slot
    pub fn bridge(&self) -> Option<&Bridge> {
        self.bridge_in(&BridgeSlot::Default)
    }

    /// Bridge in the given slot, newest attachment first
    pub fn bridge_in(&self, slot: &BridgeSlot) -> Option<&Bridge> {
        self.entries()
            .find(|entry| &entry.slot == slot)
            .map(|entry| entry.bridge.as_ref())
    }

    /// Shared handle to the bridge in the given slot
    pub fn bridge_arc(&self, slot: &BridgeSlot) -> Option<Arc<Bridge>> {
        self.entries()
            .find(|entry| &entry.slot == slot)
            .map(|entry| Arc::clone(&entry.bridge))
    }

    /// Whether nothing has been attached
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        std::iter::successors(self.head.as_deref(), |entry| entry.parent.as_deref())
    }
}

impl fmt::Debug for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries().map(|e| (e.slot.as_str(), e.bridge.id.as_str())))
            .finish()
    }
}

/// Return a context with `bridge` attached under the default name
pub fn with_bridge(ctx: &CallContext, bridge: impl Into<Arc<Bridge>>) -> CallContext {
    ctx.with_bridge(bridge)
}

/// Return a context with `bridge` attached under `name`
pub fn with_bridge_named(
    ctx: &CallContext,
    bridge: impl Into<Arc<Bridge>>,
    name: impl Into<Cow<'static, str>>,
) -> CallContext {
    ctx.with_bridge_in(BridgeSlot::named(name), bridge)
}

/// The bridge attached under the default name
pub fn bridge_from_context(ctx: &CallContext) -> Option<&Bridge> {
    ctx.bridge()
}

/// The bridge attached under `name`
pub fn bridge_from_context_named<'a>(ctx: &'a CallContext, name: &str) -> Option<&'a Bridge> {
    ctx.bridge_in(&BridgeSlot::named(name.to_string()))
}
