//! Output formatting for CLI

use kino_multiview::{ChangeKind, TapAction, TileRole};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

/// State after one script step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub line: usize,
    pub command: String,
    /// Whether the step changed coordinator state
    pub changed: bool,
    /// Whether the selection contents or order changed
    pub selection_changed: bool,
    /// Events published by the step, in order
    pub changes: Vec<ChangeKind>,
    pub mode: &'static str,
    pub layout: String,
    pub selection: Vec<String>,
    /// Selected players currently unmuted
    pub audible: Vec<String>,
    pub focused: Option<String>,
    pub full_screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<TapAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<TileReport>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TileReport {
    pub name: String,
    pub role: TileRole,
    pub controls: bool,
}

/// One row of the layout matrix
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct LayoutRow {
    #[tabled(rename = "Selected")]
    pub selected: usize,
    #[tabled(rename = "Four-player mode")]
    pub tiled_mode: String,
    #[tabled(rename = "Mode")]
    pub mode: String,
    #[tabled(rename = "Arrangement")]
    pub arrangement: String,
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "Line")]
    line: usize,
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Layout")]
    layout: String,
    #[tabled(rename = "Audio")]
    audio: String,
    #[tabled(rename = "Focus")]
    focus: String,
    #[tabled(rename = "Full screen")]
    full_screen: String,
}

/// Serialize as pretty JSON
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn audio_label(report: &StepReport) -> String {
    if report.audible.is_empty() {
        "-".to_string()
    } else {
        report.audible.join(", ")
    }
}

/// Render step reports in the selected format
pub fn render_reports(reports: &[StepReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&reports),
        OutputFormat::Table => {
            let rows = reports.iter().map(|r| StepRow {
                line: r.line,
                command: r.command.clone(),
                layout: r.layout.clone(),
                audio: audio_label(r),
                focus: or_dash(&r.focused),
                full_screen: or_dash(&r.full_screen),
            });
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Text => reports
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_text(report: &StepReport) -> String {
    let marker = if report.selection_changed {
        '*'
    } else if report.changed {
        ' '
    } else {
        '='
    };
    let mut out = format!(
        "{:>3}{} {:<22} {}  audio: {}",
        report.line,
        marker,
        report.command,
        report.layout,
        audio_label(report)
    );

    if let Some(action) = report.tap {
        out.push_str(&format!("  tap: {:?}", action));
    }
    if let Some(full_screen) = &report.full_screen {
        out.push_str(&format!("  fullscreen: {}", full_screen));
    }
    if let Some(tiles) = &report.tiles {
        for tile in tiles {
            out.push_str(&format!(
                "\n       {:<8} {:?}{}",
                tile.name,
                tile.role,
                if tile.controls { " (controls)" } else { "" }
            ));
        }
    }

    out
}

/// Render the layout matrix
pub fn render_layouts(rows: &[LayoutRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&rows),
        OutputFormat::Table | OutputFormat::Text => {
            Table::new(rows).with(Style::rounded()).to_string()
        }
    }
}
