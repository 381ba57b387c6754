use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::OutputFormat;

/// Input file used when neither the CLI nor the config names one.
pub const DEFAULT_INPUT_FILE: &str = "channels.txt";

/// Optional defaults loaded from `~/.config/teamsids/config.toml`.
///
/// Every field may be omitted; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Path to the newline-delimited link list.
    #[serde(default = "default_input_file")]
    pub file: PathBuf,
    /// Output format: "pair" (or "glean"), "channels", "groups", "json".
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            file: default_input_file(),
            output: OutputFormat::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("teamsids")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir. Nothing is written to disk;
/// a missing file (or no resolvable config dir) yields defaults.
pub fn load() -> Result<ExtractConfig> {
    match config_path() {
        Ok(path) => load_from(&path),
        Err(err) => {
            tracing::debug!("no config dir ({:#}); using defaults", err);
            Ok(ExtractConfig::default())
        }
    }
}

/// Load configuration from `path`, or defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<ExtractConfig> {
    if !path.exists() {
        return Ok(ExtractConfig::default());
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ExtractConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
