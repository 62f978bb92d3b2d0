//! CLI argument parsing with profile support

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{resolve_config_file, AnalysisConfig, ConfigBuilder, ProfilePreset};
use crate::core::dsp::{SpectrumScaling, WindowFunction};
use crate::error::{AnalysisError, Result};

#[derive(Parser, Debug)]
#[command(name = "voicecheckr", version)]
#[command(about = "Classify recordings as male or female voice type from their dominant frequencies")]
pub struct Args {
    /// Audio files or directories to analyze
    #[arg(required_unless_present = "list_profiles")]
    pub inputs: Vec<PathBuf>,

    /// Analysis profile (standard, basic)
    #[arg(short, long, env = "VOICECHECKR_PROFILE")]
    pub profile: Option<String>,

    /// JSON config file (defaults to <config dir>/voicecheckr/config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Samples per spectrogram frame
    #[arg(long)]
    pub frame_size: Option<usize>,

    /// Samples shared by consecutive frames
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Frames whose peak does not exceed this are ignored
    #[arg(short = 't', long)]
    pub energy_threshold: Option<f64>,

    /// Scale samples to a peak of 1.0 before analysis
    #[arg(long, conflicts_with = "no_peak_normalize")]
    pub peak_normalize: bool,

    /// Analyze raw amplitudes even if the profile normalizes
    #[arg(long)]
    pub no_peak_normalize: bool,

    /// Frame window (rectangular, hann, hamming, blackman, tukey, tukey:ALPHA)
    #[arg(long, value_parser = parse_window)]
    pub window: Option<WindowFunction>,

    /// Bin scaling (density, magnitude)
    #[arg(long, value_parser = parse_scaling)]
    pub scaling: Option<SpectrumScaling>,

    /// Write waveform and frequency plots into this directory
    #[arg(long)]
    pub plots: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Worker threads for batches (defaults to one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// List available profiles and exit
    #[arg(long)]
    pub list_profiles: bool,
}

fn parse_window(s: &str) -> std::result::Result<WindowFunction, String> {
    WindowFunction::from_name(s).ok_or_else(|| format!("unknown window: {}", s))
}

fn parse_scaling(s: &str) -> std::result::Result<SpectrumScaling, String> {
    SpectrumScaling::from_name(s).ok_or_else(|| format!("unknown scaling: {}", s))
}

impl Args {
    /// Build the analysis config.
    ///
    /// Base: `--config` file, else `--profile`, else the default config file
    /// if it exists, else the standard profile. Individual flags apply on top.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let base = match (&self.config, &self.profile) {
            (Some(path), _) => self.load_file(Some(path))?,
            (None, Some(name)) => {
                let preset = ProfilePreset::from_name(name).ok_or_else(|| {
                    AnalysisError::InvalidConfig(format!("unknown profile: {}", name))
                })?;
                AnalysisConfig::from_preset(preset)
            }
            (None, None) => self.load_file(None)?,
        };

        let mut builder = ConfigBuilder::from_config(base);
        if let Some(frame_size) = self.frame_size {
            builder = builder.frame_size(frame_size);
        }
        if let Some(overlap) = self.overlap {
            builder = builder.overlap(overlap);
        }
        if let Some(threshold) = self.energy_threshold {
            builder = builder.energy_threshold(threshold);
        }
        if self.peak_normalize {
            builder = builder.peak_normalize(true);
        }
        if self.no_peak_normalize {
            builder = builder.peak_normalize(false);
        }
        if let Some(window) = self.window {
            builder = builder.window(window);
        }
        if let Some(scaling) = self.scaling {
            builder = builder.scaling(scaling);
        }
        builder.build()
    }

    fn load_file(&self, path: Option<&PathBuf>) -> Result<AnalysisConfig> {
        Ok(resolve_config_file(path.map(|p| p.as_path()))?.unwrap_or_default())
    }
}

/// Print available profiles
pub fn print_profiles() {
    println!("Available analysis profiles:\n");

    for preset in ProfilePreset::all() {
        let config = AnalysisConfig::from_preset(preset);
        println!("  {} - {}", preset.name(), preset.description());
        println!(
            "    Frame: {} samples, overlap {} (hop {})",
            config.frame_size,
            config.overlap,
            config.hop_size()
        );
        println!("    Energy threshold: {}", config.energy_threshold);
        println!("    Peak normalize: {}", config.peak_normalize);
        println!();
    }
}

/// Whether `path` has one of the extensions picked up from directories
pub fn is_audio_file(path: &Path) -> bool {
    const AUDIO_EXTENSIONS: [&str; 7] = ["wav", "mp3", "flac", "ogg", "m4a", "aac", "aiff"];
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
