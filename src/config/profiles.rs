// src/config/profiles.rs
//
// Analysis presets and the configuration they produce

use serde::{Deserialize, Serialize};

use crate::core::dsp::{SpectrumScaling, WindowFunction};
use crate::error::{AnalysisError, Result};

/// Preset profiles reproducing the two known deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfilePreset {
    /// 2048-sample frames, 512 overlap, 0.01 threshold, raw amplitudes
    Standard,
    /// 256-sample frames, 32 overlap, 0.1 threshold, peak normalized
    Basic,
    /// Anything built or loaded from a file
    Custom,
}

impl ProfilePreset {
    pub fn all() -> [Self; 2] {
        [Self::Standard, Self::Basic]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standard" | "default" => Some(Self::Standard),
            "basic" | "simple" => Some(Self::Basic),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Basic => "basic",
            Self::Custom => "custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Standard => "Long frames, low threshold, any decodable format",
            Self::Basic => "Short frames, peak-normalized input, high threshold",
            Self::Custom => "User-defined settings",
        }
    }
}

/// Parameters of one classification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Samples per spectrogram frame
    pub frame_size: usize,
    /// Samples shared by consecutive frames
    pub overlap: usize,
    /// A frame counts only if its peak bin is strictly above this
    pub energy_threshold: f64,
    /// Scale samples so the largest absolute value is 1.0
    pub peak_normalize: bool,
    pub window: WindowFunction,
    pub scaling: SpectrumScaling,
    #[serde(skip)]
    pub preset: Option<ProfilePreset>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_preset(ProfilePreset::Standard)
    }
}

impl AnalysisConfig {
    pub fn from_preset(preset: ProfilePreset) -> Self {
        match preset {
            ProfilePreset::Standard | ProfilePreset::Custom => Self {
                frame_size: 2048,
                overlap: 512,
                energy_threshold: 0.01,
                peak_normalize: false,
                window: WindowFunction::default(),
                scaling: SpectrumScaling::default(),
                preset: Some(preset),
            },
            ProfilePreset::Basic => Self {
                frame_size: 256,
                overlap: 32,
                energy_threshold: 0.1,
                peak_normalize: true,
                window: WindowFunction::default(),
                scaling: SpectrumScaling::default(),
                preset: Some(preset),
            },
        }
    }

    /// Distance in samples between consecutive frame starts
    pub fn hop_size(&self) -> usize {
        self.frame_size - self.overlap
    }

    pub fn profile_name(&self) -> &'static str {
        self.preset.unwrap_or(ProfilePreset::Custom).name()
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_size < 2 {
            return Err(AnalysisError::InvalidConfig(format!(
                "frame_size must be at least 2, got {}",
                self.frame_size
            )));
        }
        if self.overlap >= self.frame_size {
            return Err(AnalysisError::InvalidConfig(format!(
                "overlap ({}) must be smaller than frame_size ({})",
                self.overlap, self.frame_size
            )));
        }
        if !self.energy_threshold.is_finite() || self.energy_threshold < 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "energy_threshold must be a non-negative number, got {}",
                self.energy_threshold
            )));
        }
        if let WindowFunction::Tukey(alpha) = self.window {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "tukey alpha must be within [0, 1], got {}",
                    alpha
                )));
            }
        }
        Ok(())
    }
}

/// Builder applying individual overrides on top of a preset
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: AnalysisConfig,
    modified: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::from_config(AnalysisConfig::default())
    }

    pub fn from_preset(preset: ProfilePreset) -> Self {
        Self::from_config(AnalysisConfig::from_preset(preset))
    }

    pub fn from_config(config: AnalysisConfig) -> Self {
        Self { config, modified: false }
    }

    pub fn frame_size(mut self, frame_size: usize) -> Self {
        self.config.frame_size = frame_size;
        self.modified = true;
        self
    }

    pub fn overlap(mut self, overlap: usize) -> Self {
        self.config.overlap = overlap;
        self.modified = true;
        self
    }

    pub fn energy_threshold(mut self, threshold: f64) -> Self {
        self.config.energy_threshold = threshold;
        self.modified = true;
        self
    }

    pub fn peak_normalize(mut self, enabled: bool) -> Self {
        self.config.peak_normalize = enabled;
        self.modified = true;
        self
    }

    pub fn window(mut self, window: WindowFunction) -> Self {
        self.config.window = window;
        self.modified = true;
        self
    }

    pub fn scaling(mut self, scaling: SpectrumScaling) -> Self {
        self.config.scaling = scaling;
        self.modified = true;
        self
    }

    /// Validate and return the config; any override marks it custom
    pub fn build(self) -> Result<AnalysisConfig> {
        let mut config = self.config;
        if self.modified {
            config.preset = Some(ProfilePreset::Custom);
        }
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
