//! Demo settings, read from an optional TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tilepath::{FinderConfig, HeuristicKind};
use tilepath_maps::MoverKind;

use crate::error::{DemoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub finder: FinderConfig,
    pub heuristic: HeuristicKind,
    pub mover: MoverKind,
    /// Whether diagonal steps may squeeze past walls.
    pub corner_cutting: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            finder: FinderConfig::default(),
            heuristic: HeuristicKind::default(),
            mover: MoverKind::default(),
            corner_cutting: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml(&text)
    }
}
