//! Configuration stored in `wrapped.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::DEFAULT_TOP_N;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wrapped.toml";

/// Wrapped configuration (TOML).
///
/// Intended to be edited by humans. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WrappedConfig {
    /// Stats file. Relative paths resolve against the config file's directory.
    pub data_path: PathBuf,

    /// Number of entries kept in the top artist/song lists.
    pub top_n: usize,
}

impl Default for WrappedConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/music_stats.csv"),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl WrappedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(anyhow!("data_path must not be empty"));
        }
        if self.top_n == 0 {
            return Err(anyhow!("top_n must be > 0"));
        }
        Ok(())
    }

    /// Resolve `data_path` against the directory holding `config_path`.
    pub fn resolve_data_path(&self, config_path: &Path) -> PathBuf {
        if self.data_path.is_absolute() {
            return self.data_path.clone();
        }
        match config_path.parent() {
            Some(dir) => dir.join(&self.data_path),
            None => self.data_path.clone(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `WrappedConfig::default()`.
pub fn load_config(path: &Path) -> Result<WrappedConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = WrappedConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WrappedConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), data_path = %cfg.data_path.display(), top_n = cfg.top_n, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &WrappedConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, buf.as_bytes())
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut tmp_name = path
        .file_name()
        .with_context(|| format!("path missing file name {}", path.display()))?
        .to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
