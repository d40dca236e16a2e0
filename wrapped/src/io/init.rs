//! Initialization helpers for config and stats scaffolding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::config::{WrappedConfig, load_config, write_config};
use super::store::{CsvRowStore, RowStore};
use crate::core::codec::encode;
use crate::core::types::WrappedState;

/// Canonical file locations for one config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedPaths {
    pub config_path: PathBuf,
    pub data_path: PathBuf,
}

impl WrappedPaths {
    pub fn new(config_path: impl Into<PathBuf>, cfg: &WrappedConfig) -> Self {
        let config_path = config_path.into();
        let data_path = cfg.resolve_data_path(&config_path);
        Self {
            config_path,
            data_path,
        }
    }

    /// Load the config at `config_path` and resolve paths from it.
    pub fn load(config_path: &Path) -> Result<(Self, WrappedConfig)> {
        let cfg = load_config(config_path)
            .with_context(|| format!("load config {}", config_path.display()))?;
        Ok((Self::new(config_path, &cfg), cfg))
    }
}

/// Options for `init_wrapped`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config file.
    pub force: bool,
}

/// Write a default config at `config_path` and an empty stats file.
///
/// Fails if the config already exists unless `options.force` is set. An
/// existing stats file is never overwritten.
pub fn init_wrapped(config_path: &Path, options: &InitOptions) -> Result<WrappedPaths> {
    if config_path.exists() && !options.force {
        return Err(anyhow!(
            "wrapped init: {} already exists (use --force to overwrite)",
            config_path.display()
        ));
    }

    let cfg = WrappedConfig::default();
    write_config(config_path, &cfg)
        .with_context(|| format!("write config {}", config_path.display()))?;
    let paths = WrappedPaths::new(config_path, &cfg);

    if !paths.data_path.exists() {
        let mut store = CsvRowStore::new(&paths.data_path);
        store.write(&encode(&WrappedState::default()))?;
    }

    info!(config = %paths.config_path.display(), data = %paths.data_path.display(), "initialized");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn init_creates_config_and_empty_stats() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("wrapped.toml");

        let paths = init_wrapped(&config_path, &InitOptions { force: false }).expect("init");

        assert!(paths.config_path.is_file());
        assert!(paths.data_path.is_file());
        assert_eq!(paths.data_path, temp.path().join("data/music_stats.csv"));
        let stats = CsvRowStore::new(&paths.data_path).read().expect("read");
        assert_eq!(stats, Some(encode(&WrappedState::default())));
    }

    #[test]
    fn init_without_force_refuses_existing_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("wrapped.toml");

        init_wrapped(&config_path, &InitOptions { force: false }).expect("init");
        let err = init_wrapped(&config_path, &InitOptions { force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn init_with_force_rewrites_config_but_keeps_stats() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("wrapped.toml");
        let paths = init_wrapped(&config_path, &InitOptions { force: false }).expect("init");

        fs::write(&config_path, "top_n = 9\n").expect("write custom config");
        fs::write(&paths.data_path, "totalMinutes\n77\n").expect("write custom stats");

        init_wrapped(&config_path, &InitOptions { force: true }).expect("re-init");

        let cfg = load_config(&config_path).expect("load");
        assert_eq!(cfg, WrappedConfig::default());
        let stats = fs::read_to_string(&paths.data_path).expect("read stats");
        assert_eq!(stats, "totalMinutes\n77\n");
    }
}
