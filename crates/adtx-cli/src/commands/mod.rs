//! CLI subcommands.

pub mod config;
pub mod models;
pub mod process;

use std::path::{Path, PathBuf};

use adtx_core::AdtxConfig;

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("adtx")
        .join("config.json")
}

/// Load the config from an explicit path, the default path, or defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<AdtxConfig> {
    if let Some(path) = explicit {
        return Ok(AdtxConfig::from_file(Path::new(path))?);
    }
    let default = default_config_path();
    if default.exists() {
        return Ok(AdtxConfig::from_file(&default)?);
    }
    Ok(AdtxConfig::default())
}
