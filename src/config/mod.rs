//! Configuration module for VoiceCheckr

mod file;
mod profiles;

pub use file::{default_config_path, load_config, resolve_config_file};
pub use profiles::{AnalysisConfig, ConfigBuilder, ProfilePreset};
