//! Kino MultiView - simultaneous playback coordination for Kino
//!
//! This crate decides, for up to five players shown at once:
//! - which players are on screen, and in what order
//! - which single player is audible
//! - how the selection is arranged (single, side by side, sidebar, grid)
//! - which tiles show controls and what a tap on a tile does
//!
//! Players themselves (decoding, ABR, DRM) stay outside; the coordinator only
//! talks to them through the [`Playable`] mute switch.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Kino MultiView                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────┐        ┌──────────────┐                    │
//! │  │   Playable   │◄───────┤    Video     │  (weak handles)    │
//! │  │   players    │  mute  │   handles    │                    │
//! │  └──────────────┘        └──────┬───────┘                    │
//! │                                 │                            │
//! │                          ┌──────┴───────┐                    │
//! │                          │  MultiView   │                    │
//! │                          │ Coordinator  │                    │
//! │                          └──┬────────┬──┘                    │
//! │                             │        │                       │
//! │                   ┌─────────┴──┐  ┌──┴───────────┐           │
//! │                   │   Layout   │  │   Events     │           │
//! │                   │   Modes    │  │ (watch + cb) │           │
//! │                   └────────────┘  └──────────────┘           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod layout;
pub mod player;
pub mod video;

pub use config::{MultiViewConfig, TiledModePreference, MAX_SELECTED};
pub use coordinator::MultiViewCoordinator;
pub use error::{Error, Result};
pub use events::{ChangeKind, ListenerId, MultiViewEvent, MultiViewSnapshot};
pub use layout::{LayoutMode, TapAction, Tile, TileRole};
pub use player::{HeadlessPlayer, Playable, PlayerId, PlayerRef};
pub use video::{Video, VideoId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "Kino MultiView initialized");
}
