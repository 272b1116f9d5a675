//! Change notification
//!
//! Every effective mutation of the coordinator produces one
//! [`MultiViewEvent`]. Listeners run synchronously, in registration order,
//! before the mutating call returns.

use crate::config::TiledModePreference;
use crate::layout::LayoutMode;
use crate::video::Video;
use serde::Serialize;

/// What changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A video was added
    Added,
    /// A video was removed
    Removed,
    /// A video was moved to the front of the selection
    Swapped,
    /// Audio focus changed
    Focus,
    /// Full-screen target changed
    FullScreen,
    /// Four-player arrangement changed
    TiledMode,
    /// Released players were dropped from the selection
    Pruned,
}

impl ChangeKind {
    /// Whether the selection contents or order changed
    pub fn affects_selection(&self) -> bool {
        matches!(
            self,
            ChangeKind::Added | ChangeKind::Removed | ChangeKind::Swapped | ChangeKind::Pruned
        )
    }
}

/// Coordinator state after a change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiViewSnapshot {
    pub selection: Vec<Video>,
    pub layout: LayoutMode,
    pub focused: Option<Video>,
    pub full_screen: Option<Video>,
    pub tiled_mode: TiledModePreference,
}

impl Default for MultiViewSnapshot {
    fn default() -> Self {
        Self {
            selection: Vec::new(),
            layout: LayoutMode::Empty,
            focused: None,
            full_screen: None,
            tiled_mode: TiledModePreference::default(),
        }
    }
}

/// Change notification with sequence number
#[derive(Debug, Clone, Serialize)]
pub struct MultiViewEvent {
    /// Increments by one per event, starting at 1
    pub sequence: u64,
    pub kind: ChangeKind,
    /// Video the change was about, if any
    pub video: Option<Video>,
    #[serde(flatten)]
    pub snapshot: MultiViewSnapshot,
}

/// Handle returned by listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&MultiViewEvent) + Send>;

/// Synchronous fan-out to registered callbacks
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl FnMut(&MultiViewEvent) + Send + 'static) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&mut self, event: &MultiViewEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
