use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::mapping::{self, MappingTable, PrefixMapping};
use crate::navigate::NavigatorKind;

/// Global configuration loaded from `~/.config/pinredirect/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinConfig {
    /// Navigator used by `redirect` when no flag overrides it.
    #[serde(default)]
    pub navigator: NavigatorKind,
    /// Replacement for the built-in table. Absent means built-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<PrefixMapping>>,
}

impl PinConfig {
    /// The table to resolve against: configured entries if present, otherwise
    /// the built-in one.
    pub fn table(&self) -> Result<Cow<'static, MappingTable>> {
        match &self.mappings {
            Some(entries) => {
                let table = MappingTable::validated(entries.clone())
                    .context("invalid [[mappings]] in config")?;
                Ok(Cow::Owned(table))
            }
            None => Ok(Cow::Borrowed(mapping::builtin())),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pinredirect")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PinConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration without touching disk when no file exists.
pub fn load() -> Result<PinConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pinredirect")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_at(&path),
        None => Ok(PinConfig::default()),
    }
}

/// Read `path`, or return the defaults if it does not exist.
pub fn load_at(path: &Path) -> Result<PinConfig> {
    if !path.exists() {
        return Ok(PinConfig::default());
    }
    read_at(path)
}

pub fn load_or_init_at(path: &Path) -> Result<PinConfig> {
    if !path.exists() {
        let default_cfg = PinConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    read_at(path)
}

fn read_at(path: &Path) -> Result<PinConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: PinConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
