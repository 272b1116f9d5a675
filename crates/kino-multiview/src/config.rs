//! MultiView configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Maximum number of simultaneously selected videos
pub const MAX_SELECTED: usize = 5;

/// How four selected videos are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiledModePreference {
    /// One large video with a sidebar of three
    #[default]
    Focused,
    /// 2x2 grid
    Tiled,
}

impl FromStr for TiledModePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "focused" => Ok(TiledModePreference::Focused),
            "tiled" | "grid" => Ok(TiledModePreference::Tiled),
            other => Err(Error::config(format!("unknown tiled mode '{}'", other))),
        }
    }
}

impl std::fmt::Display for TiledModePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TiledModePreference::Focused => write!(f, "focused"),
            TiledModePreference::Tiled => write!(f, "tiled"),
        }
    }
}

/// Coordinator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiViewConfig {
    /// Layout used when exactly four videos are selected
    pub tiled_mode: TiledModePreference,
}

impl Default for MultiViewConfig {
    fn default() -> Self {
        Self {
            tiled_mode: TiledModePreference::Focused,
        }
    }
}

impl MultiViewConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_tiled_mode(mut self, tiled_mode: TiledModePreference) -> Self {
        self.tiled_mode = tiled_mode;
        self
    }
}
