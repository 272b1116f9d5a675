//! Playable sources
//!
//! The coordinator never loads, plays or destroys media. It only needs to
//! route audio, so the player surface it sees is the mute switch plus a
//! display name. Real players (desktop, wasm, native SDK bindings) implement
//! [`Playable`]; [`HeadlessPlayer`] is an in-memory implementation for tools
//! and tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Audio control for one player instance
///
/// Methods take `&self`; implementations use interior mutability so a player
/// can be shared between the coordinator and its owner.
pub trait Playable: Send + Sync {
    /// Whether audio output is currently muted
    fn is_muted(&self) -> bool;

    /// Mute audio output
    fn mute(&self);

    /// Unmute audio output
    fn unmute(&self);

    /// Human readable name, used in logs and CLI output
    fn name(&self) -> &str {
        "player"
    }
}

/// Shared reference to a player owned outside the coordinator
pub type PlayerRef = Arc<dyn Playable>;

/// Unique identifier for a headless player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player without a decoder: tracks mute state and counts audio switches
#[derive(Debug)]
pub struct HeadlessPlayer {
    id: PlayerId,
    name: String,
    muted: AtomicBool,
    mute_calls: AtomicU64,
    unmute_calls: AtomicU64,
}

impl HeadlessPlayer {
    /// Create an unmuted player, matching a freshly created SDK player
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            muted: AtomicBool::new(false),
            mute_calls: AtomicU64::new(0),
            unmute_calls: AtomicU64::new(0),
        }
    }

    /// Create a player that starts muted
    pub fn muted(name: impl Into<String>) -> Self {
        let player = Self::new(name);
        player.muted.store(true, Ordering::SeqCst);
        player
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Number of `mute` calls received
    pub fn mute_calls(&self) -> u64 {
        self.mute_calls.load(Ordering::SeqCst)
    }

    /// Number of `unmute` calls received
    pub fn unmute_calls(&self) -> u64 {
        self.unmute_calls.load(Ordering::SeqCst)
    }

    /// Total audio switches received
    pub fn audio_switches(&self) -> u64 {
        self.mute_calls() + self.unmute_calls()
    }
}

impl Playable for HeadlessPlayer {
    fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    fn mute(&self) {
        self.mute_calls.fetch_add(1, Ordering::SeqCst);
        self.muted.store(true, Ordering::SeqCst);
    }

    fn unmute(&self) {
        self.unmute_calls.fetch_add(1, Ordering::SeqCst);
        self.muted.store(false, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
