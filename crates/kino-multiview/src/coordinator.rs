//! MultiView coordinator - the single authority over which players are on
//! screen, which one is audible, and how they are arranged.
//!
//! Coordinates:
//! - Selection of up to five videos, in display order
//! - Audio routing (at most one selected video unmuted)
//! - Layout derivation
//! - Change notification
//!
//! Invalid requests (a sixth video, focusing a video that is not selected,
//! swapping an absent video) are ignored rather than reported.

use crate::config::{MultiViewConfig, TiledModePreference, MAX_SELECTED};
use crate::events::{ChangeKind, ListenerId, Listeners, MultiViewEvent, MultiViewSnapshot};
use crate::layout::{LayoutMode, TapAction, Tile};
use crate::player::PlayerRef;
use crate::video::Video;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Coordinator for multi-view playback
#[derive(Debug)]
pub struct MultiViewCoordinator {
    /// Selected videos; index 0 is the primary tile
    selection: Vec<Video>,
    /// Audio focus, always `None` or a member of `selection`
    focused: Option<Video>,
    /// Video shown full screen, always `None` or a member of `selection`
    full_screen: Option<Video>,
    /// Arrangement for four videos
    tiled_mode: TiledModePreference,
    /// Events published so far
    sequence: u64,
    /// Synchronous callbacks
    listeners: Listeners,
    /// Latest state broadcaster
    snapshot_tx: watch::Sender<MultiViewSnapshot>,
}

impl Default for MultiViewCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiViewCoordinator {
    /// Create a coordinator with the focused four-player arrangement
    pub fn new() -> Self {
        Self::with_config(MultiViewConfig::default())
    }

    /// Create a coordinator from configuration
    pub fn with_config(config: MultiViewConfig) -> Self {
        let snapshot = MultiViewSnapshot {
            tiled_mode: config.tiled_mode,
            ..Default::default()
        };
        let (snapshot_tx, _) = watch::channel(snapshot);

        Self {
            selection: Vec::with_capacity(MAX_SELECTED),
            focused: None,
            full_screen: None,
            tiled_mode: config.tiled_mode,
            sequence: 0,
            listeners: Listeners::new(),
            snapshot_tx,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether the video is selected
    pub fn contains(&self, video: &Video) -> bool {
        self.selection.contains(video)
    }

    /// Whether the player is part of the multi view
    pub fn contains_player(&self, player: &PlayerRef) -> bool {
        self.contains(&Video::from(player))
    }

    /// Selected videos in order
    pub fn selection(&self) -> &[Video] {
        &self.selection
    }

    /// Number of selected videos
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// True when no video is selected
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// True when another video cannot be added
    pub fn is_full(&self) -> bool {
        self.selection.len() >= MAX_SELECTED
    }

    /// Audio focus set by the user
    pub fn focused(&self) -> Option<&Video> {
        self.focused.as_ref()
    }

    /// Video shown full screen
    pub fn full_screen(&self) -> Option<&Video> {
        self.full_screen.as_ref()
    }

    /// Arrangement used for four videos
    pub fn tiled_mode(&self) -> TiledModePreference {
        self.tiled_mode
    }

    /// Number of events published so far
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The video that should be audible: the focused one, else the first
    /// selected video. Videos whose players were released are skipped.
    pub fn audio_target(&self) -> Option<&Video> {
        self.focused
            .as_ref()
            .filter(|v| !v.is_released() && self.selection.contains(*v))
            .or_else(|| self.selection.iter().find(|v| !v.is_released()))
    }

    /// Current arrangement
    pub fn layout(&self) -> LayoutMode {
        LayoutMode::derive(&self.selection, self.tiled_mode)
    }

    /// Tiles of the current arrangement, controls following audio focus
    pub fn tiles(&self) -> Vec<Tile> {
        self.layout().tiles(self.focused.as_ref())
    }

    /// Current state, as sent to subscribers
    pub fn snapshot(&self) -> MultiViewSnapshot {
        MultiViewSnapshot {
            selection: self.selection.clone(),
            layout: self.layout(),
            focused: self.focused.clone(),
            full_screen: self.full_screen.clone(),
            tiled_mode: self.tiled_mode,
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Add a player, muting it first. Mirrors [`toggle`](Self::toggle) for a
    /// player that is already selected.
    pub fn add_player(&mut self, player: &PlayerRef) {
        self.add(&Video::from(player));
    }

    /// Remove a player if it is selected
    pub fn remove_player(&mut self, player: &PlayerRef) {
        self.remove(&Video::from(player));
    }

    /// Add a video, muting it first. A video that is already selected is
    /// removed, like [`toggle`](Self::toggle). Ignored when the selection is
    /// full.
    #[instrument(skip(self))]
    pub fn add(&mut self, video: &Video) {
        if !self.contains(video) && self.is_full() {
            debug!(selected = self.selection.len(), "Selection full, ignoring add");
            return;
        }

        video.ensure_muted();
        self.toggle(video);
    }

    /// Remove a selected video. Ignored when it is not selected.
    #[instrument(skip(self))]
    pub fn remove(&mut self, video: &Video) {
        if !self.contains(video) {
            debug!("Video not selected, ignoring remove");
            return;
        }

        self.toggle(video);
    }

    /// Remove the video if selected, otherwise append it when there is room
    pub fn toggle(&mut self, video: &Video) {
        if let Some(index) = self.position(video) {
            self.selection.remove(index);

            if self.focused.as_ref() == Some(video) {
                self.focused = None;
            }
            if self.full_screen.as_ref() == Some(video) {
                self.full_screen = None;
            }

            info!(video = %video, index, selected = self.selection.len(), "Video removed");
            self.apply_audio_policy();
            self.publish(ChangeKind::Removed, Some(video));
            return;
        }

        if self.is_full() {
            debug!(video = %video, "Selection full, ignoring toggle");
            return;
        }

        if video.is_released() {
            debug!(video = %video, "Player released, ignoring toggle");
            return;
        }

        self.selection.push(video.clone());

        info!(video = %video, selected = self.selection.len(), "Video added");
        self.apply_audio_policy();
        self.publish(ChangeKind::Added, Some(video));
    }

    /// Exchange the video with the primary one
    pub fn swap_to_front(&mut self, video: &Video) {
        let Some(index) = self.position(video) else {
            debug!(video = %video, "Video not selected, ignoring swap");
            return;
        };

        if index == 0 {
            return;
        }

        self.selection.swap(0, index);

        info!(video = %video, from = index, "Video moved to front");
        self.apply_audio_policy();
        self.publish(ChangeKind::Swapped, Some(video));
    }

    /// Drop videos whose players were released by their owner
    pub fn prune_released(&mut self) -> usize {
        let before = self.selection.len();
        self.selection.retain(|v| !v.is_released());
        let pruned = before - self.selection.len();

        if pruned == 0 {
            return 0;
        }

        if self.focused.as_ref().is_some_and(Video::is_released) {
            self.focused = None;
        }
        if self.full_screen.as_ref().is_some_and(Video::is_released) {
            self.full_screen = None;
        }

        info!(pruned, selected = self.selection.len(), "Released players pruned");
        self.apply_audio_policy();
        self.publish(ChangeKind::Pruned, None);
        pruned
    }

    // =========================================================================
    // Focus and presentation
    // =========================================================================

    /// Route audio to a selected video, or back to the primary with `None`
    pub fn focus(&mut self, video: Option<&Video>) {
        if let Some(v) = video {
            if !self.contains(v) {
                debug!(video = %v, "Video not selected, ignoring focus");
                return;
            }
        }

        let changed = self.focused.as_ref() != video;
        self.focused = video.cloned();
        self.apply_audio_policy();

        if changed {
            debug!(focused = ?self.focused.as_ref().map(Video::name), "Focus changed");
            self.publish(ChangeKind::Focus, video);
        }
    }

    /// Show a selected video full screen, or leave full screen with `None`
    pub fn set_full_screen(&mut self, video: Option<&Video>) {
        if let Some(v) = video {
            if !self.contains(v) {
                debug!(video = %v, "Video not selected, ignoring full screen");
                return;
            }
        }

        if self.full_screen.as_ref() == video {
            return;
        }

        self.full_screen = video.cloned();
        self.publish(ChangeKind::FullScreen, video);
    }

    /// Change the four-player arrangement
    pub fn set_tiled_mode(&mut self, tiled_mode: TiledModePreference) {
        if self.tiled_mode == tiled_mode {
            return;
        }

        self.tiled_mode = tiled_mode;
        info!(tiled_mode = %tiled_mode, layout = self.layout().name(), "Four-player mode changed");
        self.publish(ChangeKind::TiledMode, None);
    }

    /// Apply the tap gesture for the video in the current layout
    pub fn tap(&mut self, video: &Video) -> Option<TapAction> {
        let action = self.layout().tap_action(video)?;

        match action {
            TapAction::Focus => self.focus(Some(video)),
            TapAction::SwapToFront => self.swap_to_front(video),
        }

        Some(action)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Subscribe to the latest state
    pub fn subscribe(&self) -> watch::Receiver<MultiViewSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Register a callback run after every change
    pub fn on_change(
        &mut self,
        listener: impl FnMut(&MultiViewEvent) + Send + 'static,
    ) -> ListenerId {
        let id = self.listeners.add(listener);
        debug!(listeners = self.listeners.len(), "Listener registered");
        id
    }

    /// Unregister a callback. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn position(&self, video: &Video) -> Option<usize> {
        self.selection.iter().position(|v| v == video)
    }

    /// Mute every selected video except the audio target, then unmute the
    /// target. Only live players in the wrong state are called.
    fn apply_audio_policy(&self) {
        let target = self.audio_target();
        let mut switches = 0;

        for video in self
            .selection
            .iter()
            .filter(|v| Some(*v) != target && !v.is_released())
        {
            if video.ensure_muted() {
                switches += 1;
            }
        }

        if let Some(target) = target {
            if target.ensure_unmuted() {
                switches += 1;
            }
        }

        if switches > 0 {
            debug!(target = ?target.map(Video::name), switches, "Audio routed");
        }
    }

    fn publish(&mut self, kind: ChangeKind, video: Option<&Video>) {
        self.sequence += 1;

        let snapshot = self.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());

        let event = MultiViewEvent {
            sequence: self.sequence,
            kind,
            video: video.cloned(),
            snapshot,
        };
        self.listeners.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{HeadlessPlayer, Playable};
    use std::sync::{Arc, Mutex};

    struct Fixture {
        players: Vec<Arc<HeadlessPlayer>>,
        shared: Vec<PlayerRef>,
        videos: Vec<Video>,
    }

    impl Fixture {
        fn new(n: usize) -> Self {
            let players: Vec<_> = (0..n)
                .map(|i| Arc::new(HeadlessPlayer::new(format!("p{}", i))))
                .collect();
            let shared: Vec<PlayerRef> = players.iter().map(|p| p.clone() as PlayerRef).collect();
            let videos = shared.iter().map(Video::new).collect();
            Self {
                players,
                shared,
                videos,
            }
        }

        fn unmuted(&self) -> Vec<usize> {
            self.players
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_muted())
                .map(|(i, _)| i)
                .collect()
        }
    }

    #[test]
    fn test_new_coordinator_is_empty() {
        let coordinator = MultiViewCoordinator::new();
        assert!(coordinator.is_empty());
        assert_eq!(coordinator.layout(), LayoutMode::Empty);
        assert_eq!(coordinator.tiled_mode(), TiledModePreference::Focused);
        assert!(coordinator.audio_target().is_none());
    }

    #[test]
    fn test_add_mutes_all_but_primary() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();

        for video in &f.videos {
            coordinator.add(video);
        }

        assert_eq!(coordinator.len(), 3);
        assert!(!f.players[0].is_muted());
        assert!(f.players[1].is_muted());
        assert!(f.players[2].is_muted());
    }

    #[test]
    fn test_capacity_is_five() {
        let f = Fixture::new(6);
        let mut coordinator = MultiViewCoordinator::new();

        for video in &f.videos {
            coordinator.add(video);
        }

        assert_eq!(coordinator.len(), MAX_SELECTED);
        assert!(coordinator.is_full());
        assert!(!coordinator.contains(&f.videos[5]));
        // rejected adds leave the player alone
        assert!(!f.players[5].is_muted());
        assert_eq!(f.players[5].audio_switches(), 0);
    }

    #[test]
    fn test_add_selected_video_removes_it() {
        let f = Fixture::new(2);
        let mut coordinator = MultiViewCoordinator::new();

        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);
        coordinator.add(&f.videos[0]);

        assert_eq!(coordinator.selection(), &[f.videos[1].clone()]);
        assert!(!f.players[1].is_muted());
    }

    #[test]
    fn test_toggle_self_inverse() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.toggle(&f.videos[0]);
        coordinator.toggle(&f.videos[1]);
        coordinator.toggle(&f.videos[2]);

        coordinator.toggle(&f.videos[0]);
        coordinator.toggle(&f.videos[0]);

        assert_eq!(
            coordinator.selection(),
            &[f.videos[1].clone(), f.videos[2].clone(), f.videos[0].clone()]
        );
    }

    #[test]
    fn test_toggle_full_selection_ignored() {
        let f = Fixture::new(6);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos[..5] {
            coordinator.toggle(video);
        }

        let sequence = coordinator.sequence();
        coordinator.toggle(&f.videos[5]);

        assert_eq!(coordinator.len(), 5);
        assert_eq!(coordinator.sequence(), sequence);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);
        coordinator.focus(Some(&f.videos[1]));

        let before = coordinator.snapshot();
        let sequence = coordinator.sequence();
        coordinator.remove(&f.videos[2]);

        assert_eq!(coordinator.snapshot(), before);
        assert_eq!(coordinator.sequence(), sequence);
        assert!(!coordinator.contains(&f.videos[2]));
    }

    #[test]
    fn test_focus_routes_audio() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }

        coordinator.focus(Some(&f.videos[2]));
        assert_eq!(f.unmuted(), vec![2]);

        coordinator.focus(None);
        assert_eq!(f.unmuted(), vec![0]);
    }

    #[test]
    fn test_focus_unselected_is_ignored() {
        let f = Fixture::new(2);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);

        coordinator.focus(Some(&f.videos[1]));

        assert!(coordinator.focused().is_none());
        assert_eq!(coordinator.sequence(), 1);
    }

    #[test]
    fn test_removing_focused_falls_back_to_primary() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }
        coordinator.focus(Some(&f.videos[1]));

        coordinator.remove(&f.videos[1]);

        assert!(coordinator.focused().is_none());
        assert_eq!(coordinator.audio_target(), Some(&f.videos[0]));
        assert!(!f.players[0].is_muted());
        assert!(f.players[2].is_muted());
    }

    #[test]
    fn test_swap_to_front() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }

        coordinator.swap_to_front(&f.videos[2]);

        assert_eq!(
            coordinator.selection(),
            &[f.videos[2].clone(), f.videos[1].clone(), f.videos[0].clone()]
        );
        // without focus the new primary is audible
        assert_eq!(f.unmuted(), vec![2]);
    }

    #[test]
    fn test_swap_keeps_focused_audio() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }
        coordinator.focus(Some(&f.videos[1]));

        coordinator.swap_to_front(&f.videos[2]);

        assert_eq!(f.unmuted(), vec![1]);
    }

    #[test]
    fn test_swap_front_is_noop() {
        let f = Fixture::new(2);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);
        let sequence = coordinator.sequence();

        coordinator.swap_to_front(&f.videos[0]);
        coordinator.swap_to_front(&f.videos[0]);

        assert_eq!(coordinator.selection()[0], f.videos[0]);
        assert_eq!(coordinator.sequence(), sequence);
    }

    #[test]
    fn test_audio_policy_is_idempotent() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }
        coordinator.focus(Some(&f.videos[1]));

        let switches: Vec<u64> = f.players.iter().map(|p| p.audio_switches()).collect();
        coordinator.focus(Some(&f.videos[1]));
        coordinator.focus(Some(&f.videos[1]));
        let after: Vec<u64> = f.players.iter().map(|p| p.audio_switches()).collect();

        assert_eq!(switches, after);
    }

    #[test]
    fn test_full_screen_target() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);

        coordinator.set_full_screen(Some(&f.videos[2]));
        assert!(coordinator.full_screen().is_none());

        coordinator.set_full_screen(Some(&f.videos[1]));
        assert_eq!(coordinator.full_screen(), Some(&f.videos[1]));

        coordinator.remove(&f.videos[1]);
        assert!(coordinator.full_screen().is_none());
    }

    #[test]
    fn test_set_tiled_mode_changes_layout() {
        let f = Fixture::new(4);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }
        assert!(!coordinator.layout().is_tiled());

        coordinator.set_tiled_mode(TiledModePreference::Tiled);
        assert!(coordinator.layout().is_tiled());

        let sequence = coordinator.sequence();
        coordinator.set_tiled_mode(TiledModePreference::Tiled);
        assert_eq!(coordinator.sequence(), sequence);
    }

    #[test]
    fn test_tap_dispatch() {
        let f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);

        assert_eq!(coordinator.tap(&f.videos[1]), Some(TapAction::Focus));
        assert_eq!(coordinator.focused(), Some(&f.videos[1]));

        coordinator.add(&f.videos[2]);
        assert_eq!(coordinator.tap(&f.videos[0]), None);
        assert_eq!(coordinator.tap(&f.videos[2]), Some(TapAction::SwapToFront));
        assert_eq!(coordinator.selection()[0], f.videos[2]);
    }

    #[test]
    fn test_prune_released() {
        let mut f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }
        coordinator.focus(Some(&f.videos[0]));

        let released = f.players.remove(0);
        f.shared.remove(0);
        drop(released);

        assert_eq!(coordinator.prune_released(), 1);
        assert_eq!(coordinator.len(), 2);
        assert!(coordinator.focused().is_none());
        assert!(!f.players[0].is_muted());
        assert_eq!(coordinator.prune_released(), 0);
    }

    #[test]
    fn test_audio_skips_released_primary() {
        let mut f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);

        // owner drops the primary without pruning
        let released = f.players.remove(0);
        f.shared.remove(0);
        drop(released);
        let primary = f.videos.remove(0);

        coordinator.add(&f.videos[1]);

        assert_eq!(coordinator.len(), 3);
        assert_eq!(coordinator.selection()[0], primary);
        assert_eq!(coordinator.audio_target(), Some(&f.videos[0]));
        assert_eq!(f.unmuted(), vec![0]);
    }

    #[test]
    fn test_audio_skips_released_focus() {
        let mut f = Fixture::new(3);
        let mut coordinator = MultiViewCoordinator::new();
        for video in &f.videos {
            coordinator.add(video);
        }
        coordinator.focus(Some(&f.videos[2]));

        let released = f.players.remove(2);
        f.shared.remove(2);
        drop(released);

        coordinator.swap_to_front(&f.videos[1]);

        assert_eq!(coordinator.audio_target(), Some(&f.videos[1]));
        assert_eq!(f.unmuted(), vec![1]);
    }

    #[test]
    fn test_released_video_not_added() {
        let shared: PlayerRef = Arc::new(HeadlessPlayer::new("gone"));
        let video = Video::new(&shared);
        drop(shared);

        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&video);

        assert!(coordinator.is_empty());
        assert_eq!(coordinator.sequence(), 0);
    }

    #[test]
    fn test_listeners_receive_events() {
        let f = Fixture::new(2);
        let mut coordinator = MultiViewCoordinator::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let sink = events.clone();
        let id = coordinator.on_change(move |e| {
            sink.lock().unwrap().push((e.sequence, e.kind, e.snapshot.layout.name()))
        });

        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);
        coordinator.focus(Some(&f.videos[1]));
        coordinator.remove(&f.videos[0]);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                (1, ChangeKind::Added, "single"),
                (2, ChangeKind::Added, "side_by_side"),
                (3, ChangeKind::Focus, "side_by_side"),
                (4, ChangeKind::Removed, "single"),
            ]
        );

        assert!(coordinator.remove_listener(id));
        coordinator.add(&f.videos[0]);
        assert_eq!(events.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_watch_receives_latest_snapshot() {
        let f = Fixture::new(2);
        let mut coordinator = MultiViewCoordinator::new();
        let mut rx = coordinator.subscribe();

        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.selection.len(), 2);
        assert_eq!(snapshot.layout.name(), "side_by_side");
    }

    #[test]
    fn test_player_helpers() {
        let f = Fixture::new(1);
        let mut coordinator = MultiViewCoordinator::new();

        coordinator.add_player(&f.shared[0]);
        assert!(coordinator.contains_player(&f.shared[0]));

        coordinator.remove_player(&f.shared[0]);
        assert!(!coordinator.contains_player(&f.shared[0]));
    }

    #[test]
    fn test_tiles_follow_focus() {
        let f = Fixture::new(2);
        let mut coordinator = MultiViewCoordinator::new();
        coordinator.add(&f.videos[0]);
        coordinator.add(&f.videos[1]);

        assert!(coordinator.tiles().iter().all(|t| !t.shows_controls));

        coordinator.focus(Some(&f.videos[0]));
        let tiles = coordinator.tiles();
        assert!(tiles[0].shows_controls);
        assert!(!tiles[1].shows_controls);
    }
}
