// src/core/analyzer.rs
//
// High-level classification API.

use log::{debug, info};
use std::path::{Path, PathBuf};

use super::analysis::{classify_sequence, extract_dominant_frequencies, ClassificationResult};
use super::decoder::{decode_audio, decode_bytes, DecodedAudio};
use super::dsp::SpectrogramBuilder;
use super::signal::AudioSignal;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};

/// Classify a mono signal.
///
/// Runs signal preparation (optional peak normalization), the spectrogram,
/// dominant frequency extraction and the voice-type rule. Returns
/// `NoVoiceDetected` when no frame clears the energy threshold, including
/// signals shorter than one frame.
pub fn classify(signal: &AudioSignal, config: &AnalysisConfig) -> Result<ClassificationResult> {
    config.validate()?;
    if config.peak_normalize {
        classify_prepared(&signal.peak_normalized()?, config)
    } else {
        classify_prepared(signal, config)
    }
}

fn classify_prepared(signal: &AudioSignal, config: &AnalysisConfig) -> Result<ClassificationResult> {
    let builder = SpectrogramBuilder::new(
        config.frame_size,
        config.overlap,
        config.window,
        config.scaling,
    )?;
    // No complete frame means nothing to measure, same as all frames quiet
    let spectrogram = match builder.compute(signal.samples(), signal.sample_rate()) {
        Ok(spectrogram) => spectrogram,
        Err(AnalysisError::SignalTooShort { samples, frame_size }) => {
            debug!(
                "{} samples is shorter than one {}-sample frame",
                samples, frame_size
            );
            return Err(AnalysisError::NoVoiceDetected);
        }
        Err(e) => return Err(e),
    };
    let sequence = extract_dominant_frequencies(&spectrogram, config.energy_threshold);
    let result = classify_sequence(sequence)?;

    debug!(
        "Average dominant frequency {:.2} Hz over {} frames -> {}",
        result.average_frequency,
        result.frequency_sequence.len(),
        result.label
    );
    Ok(result)
}

/// Everything produced by analyzing one file
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub path: PathBuf,
    pub audio: DecodedAudio,
    /// The mono signal that was classified (normalized if configured)
    pub signal: AudioSignal,
    pub result: ClassificationResult,
}

/// Voice analyzer bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct VoiceAnalyzer {
    config: AnalysisConfig,
}

impl VoiceAnalyzer {
    /// Analyzer with the standard profile
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze_signal(&self, signal: &AudioSignal) -> Result<ClassificationResult> {
        classify(signal, &self.config)
    }

    /// Decode, downmix and classify a file
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisRun> {
        let path = path.as_ref();
        self.config.validate()?;
        let audio = decode_audio(path)?;
        self.analyze_decoded(path, audio)
    }

    /// Classify a file already read into memory.
    ///
    /// `path` labels the run and its extension is the format hint; the file
    /// is not opened again.
    pub fn analyze_bytes<P: AsRef<Path>>(&self, path: P, bytes: Vec<u8>) -> Result<AnalysisRun> {
        let path = path.as_ref();
        self.config.validate()?;
        let extension = path.extension().and_then(|e| e.to_str());
        let audio = decode_bytes(bytes, extension)?;
        self.analyze_decoded(path, audio)
    }

    fn analyze_decoded(&self, path: &Path, audio: DecodedAudio) -> Result<AnalysisRun> {
        let mut signal = audio.to_signal()?;
        if self.config.peak_normalize {
            signal = signal.peak_normalized()?;
        }

        let result = classify_prepared(&signal, &self.config)?;
        info!(
            "{}: {} ({:.2} Hz)",
            path.display(),
            result.label,
            result.average_frequency
        );

        Ok(AnalysisRun {
            path: path.to_path_buf(),
            audio,
            signal,
            result,
        })
    }
}
