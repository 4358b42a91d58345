//! User configuration
//!
//! Read from ~/.config/plconv/config.json, or from the file named by
//! `PLCONV_CONFIG`. Every field is optional; command-line flags win over
//! anything set here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::playlist::PlsNumbering;

const CONFIG_ENV: &str = "PLCONV_CONFIG";

/// Persistent converter preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Numbering used for File/Title/Length keys when writing PLS
    pub pls_numbering: PlsNumbering,
    /// Treat 0-second durations as real lengths
    pub keep_zero_length: bool,
    /// Print the converted playlist to stdout
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pls_numbering: PlsNumbering::default(),
            keep_zero_length: false,
            echo: true,
        }
    }
}

impl Config {
    /// Load the config from its default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match resolve_config_path(std::env::var_os(CONFIG_ENV)) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {:?}", path))?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Resolve the config path from the `PLCONV_CONFIG` value, else the user config dir
fn resolve_config_path(env_override: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = env_override {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("plconv").join("config.json"))
}
