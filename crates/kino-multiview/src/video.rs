//! Video handles
//!
//! A [`Video`] is the coordinator's view of one player: a non-owning
//! reference compared by identity. Two handles created from the same
//! [`PlayerRef`] are equal; handles for different players never are, even if
//! the players share a name.

use crate::player::{Playable, PlayerRef};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::{Arc, Weak};
use tracing::warn;

/// Identity of a player allocation
///
/// Stable while any [`Video`] for the player exists, since the weak
/// reference keeps the allocation reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(usize);

impl VideoId {
    fn of(player: &PlayerRef) -> Self {
        Self(Arc::as_ptr(player) as *const () as usize)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Non-owning handle to a player shown in the multi view
#[derive(Clone)]
pub struct Video {
    id: VideoId,
    name: Arc<str>,
    player: Weak<dyn Playable>,
}

impl Video {
    pub fn new(player: &PlayerRef) -> Self {
        Self {
            id: VideoId::of(player),
            name: Arc::from(player.name()),
            player: Arc::downgrade(player),
        }
    }

    pub fn id(&self) -> VideoId {
        self.id
    }

    /// Player name captured when the handle was created
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player, if its owner still holds it
    pub fn player(&self) -> Option<PlayerRef> {
        self.player.upgrade()
    }

    /// True once the owner has dropped the player
    pub fn is_released(&self) -> bool {
        self.player.strong_count() == 0
    }

    /// Mute state, `None` for a released player
    pub fn is_muted(&self) -> Option<bool> {
        self.player().map(|p| p.is_muted())
    }

    /// Mute if currently audible. Returns whether a call was issued.
    pub(crate) fn ensure_muted(&self) -> bool {
        match self.player() {
            Some(player) if !player.is_muted() => {
                player.mute();
                true
            }
            Some(_) => false,
            None => {
                warn!(video = %self, "Cannot mute released player");
                false
            }
        }
    }

    /// Unmute if currently muted. Returns whether a call was issued.
    pub(crate) fn ensure_unmuted(&self) -> bool {
        match self.player() {
            Some(player) if player.is_muted() => {
                player.unmute();
                true
            }
            Some(_) => false,
            None => {
                warn!(video = %self, "Cannot unmute released player");
                false
            }
        }
    }
}

impl From<&PlayerRef> for Video {
    fn from(player: &PlayerRef) -> Self {
        Video::new(player)
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

impl std::hash::Hash for Video {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for Video {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Video")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("released", &self.is_released())
            .finish()
    }
}

impl std::fmt::Display for Video {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

impl Serialize for Video {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Video", 3)?;
        state.serialize_field("id", &self.id.to_string())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("muted", &self.is_muted())?;
        state.end()
    }
}
