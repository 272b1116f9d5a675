//! Layout modes
//!
//! The arrangement of the multi view is derived from the selection on every
//! read; it is never stored. Geometry (split ratios, stacking direction for
//! compact screens) belongs to the renderer. This module only decides which
//! video goes where and which tiles react to taps.
//!
//! | Selected | Four-player mode | Layout |
//! |---|---|---|
//! | 0 | any | `Empty` |
//! | 1 | any | `Single` |
//! | 2 | any | `SideBySide` |
//! | 3 | any | `FocusedSidebar` (sidebar of 2) |
//! | 4 | focused | `FocusedSidebar` (sidebar of 3) |
//! | 4 | tiled | `Tiled` (2x2) |
//! | 5 | any | `CenterSidebar` (2 left, 2 right) |

use crate::config::TiledModePreference;
use crate::video::Video;
use serde::Serialize;

/// Screen arrangement for the selected videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Nothing selected
    Empty,
    /// One video fills the view
    Single { video: Video },
    /// Two equal panes
    SideBySide { first: Video, second: Video },
    /// Large video plus a sidebar of thumbnails
    FocusedSidebar { focused: Video, sidebar: Vec<Video> },
    /// 2x2 grid
    Tiled { videos: Vec<Video> },
    /// Large video between two sidebars
    CenterSidebar {
        left: Vec<Video>,
        center: Video,
        right: Vec<Video>,
    },
    /// Selection size has no arrangement
    Invalid,
}

impl LayoutMode {
    /// Derive the layout for a selection in display order
    pub fn derive(selection: &[Video], tiled_mode: TiledModePreference) -> Self {
        match (selection, tiled_mode) {
            ([], _) => LayoutMode::Empty,
            ([video], _) => LayoutMode::Single {
                video: video.clone(),
            },
            ([first, second], _) => LayoutMode::SideBySide {
                first: first.clone(),
                second: second.clone(),
            },
            ([focused, sidebar @ ..], _)
                if selection.len() == 3
                    || (selection.len() == 4 && tiled_mode == TiledModePreference::Focused) =>
            {
                LayoutMode::FocusedSidebar {
                    focused: focused.clone(),
                    sidebar: sidebar.to_vec(),
                }
            }
            ([_, _, _, _], TiledModePreference::Tiled) => LayoutMode::Tiled {
                videos: selection.to_vec(),
            },
            ([center, l1, l2, r1, r2], _) => LayoutMode::CenterSidebar {
                left: vec![l1.clone(), l2.clone()],
                center: center.clone(),
                right: vec![r1.clone(), r2.clone()],
            },
            _ => LayoutMode::Invalid,
        }
    }

    /// Short mode name
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Empty => "empty",
            LayoutMode::Single { .. } => "single",
            LayoutMode::SideBySide { .. } => "side_by_side",
            LayoutMode::FocusedSidebar { .. } => "focused_sidebar",
            LayoutMode::Tiled { .. } => "tiled",
            LayoutMode::CenterSidebar { .. } => "center_sidebar",
            LayoutMode::Invalid => "invalid",
        }
    }

    pub fn is_tiled(&self) -> bool {
        matches!(self, LayoutMode::Tiled { .. })
    }

    /// Videos in reading order (left to right, top to bottom)
    pub fn videos(&self) -> Vec<&Video> {
        match self {
            LayoutMode::Empty | LayoutMode::Invalid => Vec::new(),
            LayoutMode::Single { video } => vec![video],
            LayoutMode::SideBySide { first, second } => vec![first, second],
            LayoutMode::FocusedSidebar { focused, sidebar } => {
                std::iter::once(focused).chain(sidebar.iter()).collect()
            }
            LayoutMode::Tiled { videos } => videos.iter().collect(),
            LayoutMode::CenterSidebar {
                left,
                center,
                right,
            } => left
                .iter()
                .chain(std::iter::once(center))
                .chain(right.iter())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.videos().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tiles in reading order with their role and control visibility
    ///
    /// `audio_focus` decides which pane shows controls in layouts without a
    /// primary tile.
    pub fn tiles(&self, audio_focus: Option<&Video>) -> Vec<Tile> {
        let pane = |video: &Video| Tile {
            video: video.clone(),
            role: TileRole::Pane,
            shows_controls: audio_focus == Some(video),
        };
        let grid = |video: &Video| Tile {
            video: video.clone(),
            role: TileRole::Grid,
            shows_controls: audio_focus == Some(video),
        };

        match self {
            LayoutMode::Empty | LayoutMode::Invalid => Vec::new(),
            LayoutMode::Single { video } => vec![Tile::primary(video)],
            LayoutMode::SideBySide { first, second } => vec![pane(first), pane(second)],
            LayoutMode::FocusedSidebar { focused, sidebar } => std::iter::once(Tile::primary(focused))
                .chain(sidebar.iter().map(Tile::sidebar))
                .collect(),
            LayoutMode::Tiled { videos } => videos.iter().map(grid).collect(),
            LayoutMode::CenterSidebar {
                left,
                center,
                right,
            } => left
                .iter()
                .map(Tile::sidebar)
                .chain(std::iter::once(Tile::primary(center)))
                .chain(right.iter().map(Tile::sidebar))
                .collect(),
        }
    }

    /// Rows for grid rendering: pairs for `Tiled`, a single row otherwise
    pub fn rows(&self) -> Vec<Vec<&Video>> {
        match self {
            LayoutMode::Tiled { videos } => videos.chunks(2).map(|row| row.iter().collect()).collect(),
            _ => {
                let videos = self.videos();
                if videos.is_empty() {
                    Vec::new()
                } else {
                    vec![videos]
                }
            }
        }
    }

    /// What a tap on `video` should do in this layout
    pub fn tap_action(&self, video: &Video) -> Option<TapAction> {
        match self {
            LayoutMode::SideBySide { first, second } if first == video || second == video => {
                Some(TapAction::Focus)
            }
            LayoutMode::Tiled { videos } if videos.contains(video) => Some(TapAction::Focus),
            LayoutMode::FocusedSidebar { sidebar, .. } if sidebar.contains(video) => {
                Some(TapAction::SwapToFront)
            }
            LayoutMode::CenterSidebar { left, right, .. }
                if left.contains(video) || right.contains(video) =>
            {
                Some(TapAction::SwapToFront)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutMode::Empty => write!(f, "empty"),
            LayoutMode::Invalid => write!(f, "invalid"),
            LayoutMode::Single { video } => write!(f, "single({})", video.name()),
            LayoutMode::SideBySide { first, second } => {
                write!(f, "side_by_side({}, {})", first.name(), second.name())
            }
            LayoutMode::FocusedSidebar { focused, sidebar } => {
                write!(f, "focused_sidebar({} | {})", focused.name(), join_names(sidebar))
            }
            LayoutMode::Tiled { videos } => write!(f, "tiled({})", join_names(videos)),
            LayoutMode::CenterSidebar {
                left,
                center,
                right,
            } => write!(
                f,
                "center_sidebar({} | {} | {})",
                join_names(left),
                center.name(),
                join_names(right)
            ),
        }
    }
}

fn join_names(videos: &[Video]) -> String {
    videos
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Position of a tile within its layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileRole {
    /// The large tile of single, focused and center layouts
    Primary,
    /// One of two equal side-by-side panes
    Pane,
    /// Thumbnail next to the primary tile
    Sidebar,
    /// Cell of the 2x2 grid
    Grid,
}

/// One rendered video slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub video: Video,
    pub role: TileRole,
    /// Whether playback controls are overlaid on this tile
    pub shows_controls: bool,
}

impl Tile {
    fn primary(video: &Video) -> Self {
        Self {
            video: video.clone(),
            role: TileRole::Primary,
            shows_controls: true,
        }
    }

    fn sidebar(video: &Video) -> Self {
        Self {
            video: video.clone(),
            role: TileRole::Sidebar,
            shows_controls: false,
        }
    }
}

/// Gesture outcome for a tapped tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TapAction {
    /// Route audio to the tapped video
    Focus,
    /// Move the tapped video into the primary slot
    SwapToFront,
}
