//! Configuration loading and parsing.
//!
//! Parses `oxcmd.toml` (or an override path provided by the binary) for the
//! history and undo bounds plus the optional history persistence file. Unknown
//! fields are ignored so older binaries tolerate newer files. A missing or
//! unparsable file yields defaults; the engine never fails to start because
//! of configuration.
//!
//! Bounds of zero are clamped to one when the effective limits are computed
//! (`Config::limits`). The raw parsed values are retained unchanged.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const DEFAULT_MAX_CMD_HISTORY: usize = 2000;
pub const DEFAULT_MAX_DIR_HISTORY: usize = 9;
pub const DEFAULT_UNDO_LIMIT: usize = 200;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_cmd_len")]
    pub max_cmd_history_length: usize,
    #[serde(default = "HistoryConfig::default_dir_len")]
    pub max_dir_history_length: usize,
    /// Command history persistence file; history is memory-only when absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_cmd_history_length: Self::default_cmd_len(),
            max_dir_history_length: Self::default_dir_len(),
            file: None,
        }
    }
}

impl HistoryConfig {
    const fn default_cmd_len() -> usize {
        DEFAULT_MAX_CMD_HISTORY
    }
    const fn default_dir_len() -> usize {
        DEFAULT_MAX_DIR_HISTORY
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UndoConfig {
    #[serde(default = "UndoConfig::default_limit")]
    pub limit: usize,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
        }
    }
}

impl UndoConfig {
    const fn default_limit() -> usize {
        DEFAULT_UNDO_LIMIT
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub undo: UndoConfig,
}

/// Effective bounds handed to the engine constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_cmd_history: usize,
    pub max_dir_history: usize,
    pub undo_limit: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub path: Option<PathBuf>,
    pub file: ConfigFile, // parsed (or default) data
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("oxcmd.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxcmd").join("oxcmd.toml");
    }
    PathBuf::from("oxcmd.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_missing_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Effective bounds with zero values clamped to one.
    pub fn limits(&self) -> Limits {
        let h = &self.file.history;
        Limits {
            max_cmd_history: clamp_bound("max_cmd_history_length", h.max_cmd_history_length),
            max_dir_history: clamp_bound("max_dir_history_length", h.max_dir_history_length),
            undo_limit: clamp_bound("undo.limit", self.file.undo.limit),
        }
    }

    /// History file path, resolved relative to the config file's directory
    /// when given as a relative path.
    pub fn history_file(&self) -> Option<PathBuf> {
        let file = self.file.history.file.as_ref()?;
        if file.is_absolute() {
            return Some(file.clone());
        }
        let base = self.path.as_ref().and_then(|p| p.parent());
        Some(match base {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(file),
            _ => file.clone(),
        })
    }
}

fn clamp_bound(key: &'static str, raw: usize) -> usize {
    if raw == 0 {
        info!(target: "config", key, raw, clamped = 1, "bound_clamped");
        1
    } else {
        raw
    }
}
