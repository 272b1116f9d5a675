//! Selection script parsing
//!
//! One command per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! add A
//! focus B          # or: focus none
//! swap C
//! tap D
//! fullscreen A     # or: fullscreen none
//! mode tiled       # or: mode focused
//! release E
//! layout
//! ```

use anyhow::{anyhow, bail, Context};
use kino_multiview::TiledModePreference;

/// One script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Add(String),
    Remove(String),
    Toggle(String),
    Swap(String),
    Tap(String),
    Focus(Option<String>),
    FullScreen(Option<String>),
    Mode(TiledModePreference),
    Release(String),
    Layout,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = |name: &Option<String>| name.clone().unwrap_or_else(|| "none".to_string());

        match self {
            Step::Add(name) => write!(f, "add {}", name),
            Step::Remove(name) => write!(f, "remove {}", name),
            Step::Toggle(name) => write!(f, "toggle {}", name),
            Step::Swap(name) => write!(f, "swap {}", name),
            Step::Tap(name) => write!(f, "tap {}", name),
            Step::Focus(name) => write!(f, "focus {}", target(name)),
            Step::FullScreen(name) => write!(f, "fullscreen {}", target(name)),
            Step::Mode(mode) => write!(f, "mode {}", mode),
            Step::Release(name) => write!(f, "release {}", name),
            Step::Layout => write!(f, "layout"),
        }
    }
}

/// A parsed command with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
}

/// Parse a whole script
pub fn parse_script(source: &str) -> anyhow::Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(step) = parse_line(raw).with_context(|| format!("line {}", line))? {
            lines.push(ScriptLine { line, step });
        }
    }

    Ok(lines)
}

/// Parse one line; `None` for blank lines and comments
pub fn parse_line(raw: &str) -> anyhow::Result<Option<Step>> {
    let content = raw.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let argument = words.next().map(str::to_string);

    if let Some(extra) = words.next() {
        bail!("unexpected argument '{}'", extra);
    }

    let required = |argument: Option<String>| {
        argument.ok_or_else(|| anyhow!("'{}' needs a player name", command))
    };
    let optional = |argument: Option<String>| {
        required(argument).map(|name| {
            if name.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(name)
            }
        })
    };

    let step = match command.as_str() {
        "add" => Step::Add(required(argument)?),
        "remove" => Step::Remove(required(argument)?),
        "toggle" => Step::Toggle(required(argument)?),
        "swap" => Step::Swap(required(argument)?),
        "tap" => Step::Tap(required(argument)?),
        "release" => Step::Release(required(argument)?),
        "focus" => Step::Focus(optional(argument)?),
        "fullscreen" => Step::FullScreen(optional(argument)?),
        "mode" => {
            let mode = argument.ok_or_else(|| anyhow!("'mode' needs 'focused' or 'tiled'"))?;
            Step::Mode(mode.parse()?)
        }
        "layout" => {
            if argument.is_some() {
                bail!("'layout' takes no argument");
            }
            Step::Layout
        }
        other => bail!("unknown command '{}'", other),
    };

    Ok(Some(step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("add A").unwrap(), Some(Step::Add("A".into())));
        assert_eq!(parse_line("  SWAP  cam-2 ").unwrap(), Some(Step::Swap("cam-2".into())));
        assert_eq!(parse_line("focus none").unwrap(), Some(Step::Focus(None)));
        assert_eq!(parse_line("fullscreen B").unwrap(), Some(Step::FullScreen(Some("B".into()))));
        assert_eq!(
            parse_line("mode tiled").unwrap(),
            Some(Step::Mode(TiledModePreference::Tiled))
        );
        assert_eq!(parse_line("layout").unwrap(), Some(Step::Layout));
    }

    #[test]
    fn test_skip_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # just a note").unwrap(), None);
        assert_eq!(parse_line("add A # first").unwrap(), Some(Step::Add("A".into())));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("add").is_err());
        assert!(parse_line("add A B").is_err());
        assert!(parse_line("mode mosaic").is_err());
        assert!(parse_line("layout A").is_err());
        assert!(parse_line("shuffle A").is_err());
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("add A\n\nexplode B\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3");
        assert!(format!("{:#}", err).contains("unknown command 'explode'"));

        let lines = parse_script("# demo\nadd A\nfocus A\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 2);
        assert_eq!(lines[1].step.to_string(), "focus A");
    }
}
