use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Compression applied to file entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

/// Global configuration loaded from `~/.config/sitezip/config.toml`.
///
/// Only archive encoding is tunable; how URLs map to paths is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitezipConfig {
    /// "deflated" (default) or "stored".
    #[serde(default)]
    pub compression: Compression,
    /// Unix permission bits recorded on file entries.
    #[serde(default = "default_file_permissions")]
    pub file_permissions: u32,
}

fn default_file_permissions() -> u32 {
    0o644
}

impl Default for SitezipConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            file_permissions: default_file_permissions(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitezip")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitezipConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SitezipConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SitezipConfig = toml::from_str(&data)?;
    Ok(cfg)
}
