// src/core/signal.rs
//
// Mono signal type and preparation of decoded audio.

use log::debug;

use crate::error::{AnalysisError, Result};

/// Mono samples at a known sample rate. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::InvalidSignal("signal has no samples".to_string()));
        }
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidSignal("sample rate must be positive".to_string()));
        }
        if let Some(pos) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::InvalidSignal(format!(
                "non-finite sample at index {}",
                pos
            )));
        }
        Ok(Self { samples, sample_rate })
    }

    /// Average interleaved channels into one mono signal
    pub fn from_interleaved(samples: &[f32], channels: usize, sample_rate: u32) -> Result<Self> {
        Self::new(downmix(samples, channels)?, sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Scale so the largest absolute sample is 1.0.
    /// A silent signal has nothing to classify and is rejected here.
    pub fn peak_normalized(&self) -> Result<Self> {
        let peak = self.peak();
        if peak == 0.0 {
            return Err(AnalysisError::NoVoiceDetected);
        }
        debug!("Peak normalizing by {:.6}", peak);
        Ok(Self {
            samples: self.samples.iter().map(|s| s / peak).collect(),
            sample_rate: self.sample_rate,
        })
    }
}

/// Sample-wise channel average of interleaved audio
pub fn downmix(samples: &[f32], channels: usize) -> Result<Vec<f32>> {
    if channels == 0 {
        return Err(AnalysisError::InvalidSignal("channel count must be positive".to_string()));
    }
    if channels == 1 {
        return Ok(samples.to_vec());
    }
    if samples.len() % channels != 0 {
        debug!(
            "Dropping {} trailing samples of an incomplete frame",
            samples.len() % channels
        );
    }

    Ok(samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect())
}
