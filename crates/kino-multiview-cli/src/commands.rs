//! CLI command implementations

use crate::output::{self, OutputFormat, StepReport, TileReport};
use crate::script::{parse_script, ScriptLine, Step};
use anyhow::{bail, Context};
use kino_multiview::{
    ChangeKind, HeadlessPlayer, LayoutMode, MultiViewConfig, MultiViewCoordinator, PlayerRef,
    TapAction, TiledModePreference, Video, MAX_SELECTED,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Walkthrough replayed by `demo`
pub const DEMO_SCRIPT: &str = "\
# fill the multi view one player at a time
mode tiled
add A
add B
focus B
add C
add D
add E
add F            # sixth player is ignored
layout
tap D            # sidebar tap promotes D
fullscreen D
remove D
release E
layout
";

/// Players driven by a script, plus the coordinator under test
pub struct Session {
    coordinator: MultiViewCoordinator,
    players: BTreeMap<String, Arc<HeadlessPlayer>>,
    videos: BTreeMap<String, Video>,
    /// Change kinds published during the current step
    changes: Arc<Mutex<Vec<ChangeKind>>>,
}

impl Session {
    pub fn new(names: &[String], config: MultiViewConfig) -> Self {
        let mut players = BTreeMap::new();
        let mut videos = BTreeMap::new();

        for name in names {
            let player = Arc::new(HeadlessPlayer::new(name.clone()));
            debug!(player = %name, id = %player.id(), "Player created");
            let shared: PlayerRef = player.clone();
            videos.insert(name.clone(), Video::new(&shared));
            players.insert(name.clone(), player);
        }

        info!(players = players.len(), tiled_mode = %config.tiled_mode, "Session created");

        let mut coordinator = MultiViewCoordinator::with_config(config);
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();
        coordinator.on_change(move |event| {
            if let Ok(mut kinds) = sink.lock() {
                kinds.push(event.kind);
            }
        });

        Self {
            coordinator,
            players,
            videos,
            changes,
        }
    }

    pub fn coordinator(&self) -> &MultiViewCoordinator {
        &self.coordinator
    }

    fn video(&self, name: &str) -> anyhow::Result<Video> {
        if !self.players.contains_key(name) {
            if self.videos.contains_key(name) {
                bail!("player '{}' was released", name);
            }
            bail!("unknown player '{}'", name);
        }

        self.videos
            .get(name)
            .cloned()
            .with_context(|| format!("no handle for player '{}'", name))
    }

    fn take_changes(&self) -> Vec<ChangeKind> {
        self.changes
            .lock()
            .map(|mut kinds| std::mem::take(&mut *kinds))
            .unwrap_or_default()
    }

    /// Apply one step and describe the resulting state
    pub fn apply(&mut self, line: &ScriptLine) -> anyhow::Result<StepReport> {
        let before = self.coordinator.sequence();
        let mut tap = None;
        self.take_changes();

        match &line.step {
            Step::Add(name) => {
                let video = self.video(name)?;
                self.coordinator.add(&video);
            }
            Step::Remove(name) => {
                let video = self.video(name)?;
                self.coordinator.remove(&video);
            }
            Step::Toggle(name) => {
                let video = self.video(name)?;
                self.coordinator.toggle(&video);
            }
            Step::Swap(name) => {
                let video = self.video(name)?;
                self.coordinator.swap_to_front(&video);
            }
            Step::Tap(name) => {
                let video = self.video(name)?;
                tap = self.coordinator.tap(&video);
            }
            Step::Focus(name) => {
                let video = name.as_deref().map(|n| self.video(n)).transpose()?;
                self.coordinator.focus(video.as_ref());
            }
            Step::FullScreen(name) => {
                let video = name.as_deref().map(|n| self.video(n)).transpose()?;
                self.coordinator.set_full_screen(video.as_ref());
            }
            Step::Mode(mode) => self.coordinator.set_tiled_mode(*mode),
            Step::Release(name) => {
                if self.players.remove(name).is_none() {
                    bail!("unknown player '{}'", name);
                }
                let pruned = self.coordinator.prune_released();
                debug!(player = %name, pruned, "Player released");
            }
            Step::Layout => {}
        }

        let changes = self.take_changes();
        Ok(self.report(line, before, tap, changes))
    }

    fn report(
        &self,
        line: &ScriptLine,
        sequence_before: u64,
        tap: Option<TapAction>,
        changes: Vec<ChangeKind>,
    ) -> StepReport {
        let coordinator = &self.coordinator;
        let layout = coordinator.layout();
        let names = |videos: &[Video]| -> Vec<String> {
            videos.iter().map(|v| v.name().to_string()).collect()
        };

        let tiles = matches!(line.step, Step::Layout).then(|| {
            coordinator
                .tiles()
                .into_iter()
                .map(|tile| TileReport {
                    name: tile.video.name().to_string(),
                    role: tile.role,
                    controls: tile.shows_controls,
                })
                .collect::<Vec<_>>()
        });

        StepReport {
            line: line.line,
            command: line.step.to_string(),
            changed: coordinator.sequence() != sequence_before,
            selection_changed: changes.iter().any(ChangeKind::affects_selection),
            changes,
            mode: layout.name(),
            layout: layout.to_string(),
            selection: names(coordinator.selection()),
            audible: coordinator
                .selection()
                .iter()
                .filter(|v| v.is_muted() == Some(false))
                .map(|v| v.name().to_string())
                .collect(),
            focused: coordinator.focused().map(|v| v.name().to_string()),
            full_screen: coordinator.full_screen().map(|v| v.name().to_string()),
            tap,
            tiles,
        }
    }
}

/// Run every line of a parsed script, stopping at the first failing step
pub fn run_lines(session: &mut Session, lines: &[ScriptLine]) -> anyhow::Result<Vec<StepReport>> {
    lines
        .iter()
        .map(|line| {
            session
                .apply(line)
                .with_context(|| format!("line {}: {}", line.line, line.step))
        })
        .collect()
}

/// Replay a script file
pub fn run(
    script: &Path,
    players: &[String],
    config: MultiViewConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(script)
        .with_context(|| format!("failed to read script {}", script.display()))?;
    let lines = parse_script(&source)?;

    info!(script = %script.display(), steps = lines.len(), "Replaying script");

    let mut session = Session::new(players, config);
    let reports = run_lines(&mut session, &lines)?;
    info!(selected = session.coordinator().len(), "Script finished");
    println!("{}", output::render_reports(&reports, format));

    Ok(())
}

/// Replay the built-in walkthrough
pub fn demo(config: MultiViewConfig, format: OutputFormat) -> anyhow::Result<()> {
    let players: Vec<String> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let lines = parse_script(DEMO_SCRIPT)?;

    let mut session = Session::new(&players, config);
    let reports = run_lines(&mut session, &lines)?;
    info!(selected = session.coordinator().len(), "Script finished");
    println!("{}", output::render_reports(&reports, format));

    Ok(())
}

/// Print the layout chosen for every selection size
pub fn layouts(format: OutputFormat) -> anyhow::Result<()> {
    let shared: Vec<PlayerRef> = (1..=MAX_SELECTED)
        .map(|i| Arc::new(HeadlessPlayer::new(i.to_string())) as PlayerRef)
        .collect();
    let videos: Vec<Video> = shared.iter().map(Video::new).collect();

    let mut rows = Vec::new();
    for count in 0..=MAX_SELECTED {
        for tiled_mode in [TiledModePreference::Focused, TiledModePreference::Tiled] {
            let layout = LayoutMode::derive(&videos[..count], tiled_mode);
            rows.push(output::LayoutRow {
                selected: count,
                tiled_mode: tiled_mode.to_string(),
                mode: layout.name().to_string(),
                arrangement: layout.to_string(),
            });
        }
    }

    println!("{}", output::render_layouts(&rows, format));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_demo_script_runs() {
        let lines = parse_script(DEMO_SCRIPT).unwrap();
        let mut session = Session::new(&names(&["A", "B", "C", "D", "E", "F"]), MultiViewConfig::default());
        let reports = run_lines(&mut session, &lines).unwrap();

        let add_f = reports.iter().find(|r| r.command == "add F").unwrap();
        assert!(!add_f.changed);
        assert!(add_f.changes.is_empty());

        let focus = reports.iter().find(|r| r.command == "focus B").unwrap();
        assert_eq!(focus.changes, vec![ChangeKind::Focus]);
        assert!(!focus.selection_changed);
        assert_eq!(add_f.mode, "center_sidebar");

        let tap = reports.iter().find(|r| r.command == "tap D").unwrap();
        assert_eq!(tap.changes, vec![ChangeKind::Swapped]);
        assert!(tap.selection_changed);
        assert_eq!(tap.selection, names(&["D", "B", "C", "A", "E"]));
        assert_eq!(tap.audible, names(&["B"]));

        let last = reports.last().unwrap();
        assert_eq!(last.selection, names(&["B", "C", "A"]));
        assert_eq!(last.full_screen, None);
        assert_eq!(last.focused.as_deref(), Some("B"));
        assert!(last.tiles.is_some());
    }

    #[test]
    fn test_unknown_player_fails() {
        let lines = parse_script("add A\nadd Z\n").unwrap();
        let mut session = Session::new(&names(&["A"]), MultiViewConfig::default());

        let err = run_lines(&mut session, &lines).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown player 'Z'"));
    }

    #[test]
    fn test_released_player_cannot_be_added() {
        let lines = parse_script("add A\nrelease A\nadd A\n").unwrap();
        let mut session = Session::new(&names(&["A"]), MultiViewConfig::default());

        let err = run_lines(&mut session, &lines).unwrap_err();
        assert!(format!("{:#}", err).contains("was released"));
        assert!(session.coordinator().is_empty());
    }

    #[test]
    fn test_run_script_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "add A\nadd B\nlayout").unwrap();

        run(
            file.path(),
            &names(&["A", "B"]),
            MultiViewConfig::default(),
            OutputFormat::Json,
        )
        .unwrap();
    }
}
