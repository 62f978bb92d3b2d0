// src/config/file.rs
//
// JSON config file loading

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use super::profiles::{AnalysisConfig, ProfilePreset};
use crate::error::{AnalysisError, Result};

const CONFIG_DIR: &str = "voicecheckr";
const CONFIG_FILE: &str = "config.json";

/// `<config_dir>/voicecheckr/config.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a config file. Missing keys fall back to the standard preset.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let text = fs::read_to_string(path)?;
    let mut config: AnalysisConfig = serde_json::from_str(&text).map_err(|e| {
        AnalysisError::InvalidConfig(format!("{}: {}", path.display(), e))
    })?;
    config.preset = Some(ProfilePreset::Custom);
    config.validate()?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the explicit path if given, else the default path if it exists.
pub fn resolve_config_file(explicit: Option<&Path>) -> Result<Option<AnalysisConfig>> {
    if let Some(path) = explicit {
        return load_config(path).map(Some);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_config(&path).map(Some),
        _ => Ok(None),
    }
}
