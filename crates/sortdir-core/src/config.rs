use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::organizer::GroupingMethod;

/// Logging section (`[log]` in config.toml).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive understood by `tracing_subscriber::EnvFilter` (e.g. "info", "debug").
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Append log lines to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Optional defaults loaded from `~/.config/sortdir/config.toml`.
///
/// Every key is optional; command-line flags override whatever is set here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SortdirConfig {
    /// Default grouping method when `--method` is not given.
    pub method: Option<GroupingMethod>,
    /// Default extension allow-list when `--extensions` is not given.
    pub extensions: Option<Vec<String>>,
    pub log: LogConfig,
}

/// Default config location: `~/.config/sortdir/config.toml`.
///
/// `with_prefix` already scopes the config home to `sortdir/`.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sortdir")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Parse a config file at an explicit path. A missing file is an error here.
pub fn load_from_path(path: &Path) -> Result<SortdirConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SortdirConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load the config from `explicit` if given, else from the XDG location if a file exists there.
///
/// Unlike an explicit path, a missing default file just yields built-in defaults; nothing
/// is written to disk.
pub fn load(explicit: Option<&Path>) -> Result<SortdirConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    let path = config_path()?;
    if !path.is_file() {
        return Ok(SortdirConfig::default());
    }
    load_from_path(&path)
}
