// src/core/analysis/dominant.rs
//
// Per-frame dominant frequency extraction.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::dsp::Spectrogram;

/// Dominant frequencies of the frames that cleared the energy threshold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DominantFrequencySequence {
    /// Bin centre frequency of each accepted frame, in frame order
    pub frequencies: Vec<f64>,
    /// Spectrogram frame index each value came from
    pub frame_indices: Vec<usize>,
    /// Frames examined, accepted or not
    pub total_frames: usize,
}

impl DominantFrequencySequence {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Share of frames that produced a value
    pub fn coverage(&self) -> f64 {
        if self.total_frames == 0 {
            0.0
        } else {
            self.frequencies.len() as f64 / self.total_frames as f64
        }
    }

    pub fn mean(&self) -> Option<f64> {
        if self.frequencies.is_empty() {
            None
        } else {
            Some(self.frequencies.iter().sum::<f64>() / self.frequencies.len() as f64)
        }
    }
}

/// Keep the peak bin of every frame whose peak is strictly above `energy_threshold`.
pub fn extract_dominant_frequencies(
    spectrogram: &Spectrogram,
    energy_threshold: f64,
) -> DominantFrequencySequence {
    let mut sequence = DominantFrequencySequence {
        total_frames: spectrogram.frames.len(),
        ..Default::default()
    };

    for frame in &spectrogram.frames {
        let Some((bin, magnitude)) = frame.peak() else {
            continue;
        };
        if magnitude > energy_threshold {
            sequence.frequencies.push(spectrogram.frequencies[bin]);
            sequence.frame_indices.push(frame.index);
        }
    }

    debug!(
        "Accepted {}/{} frames above threshold {}",
        sequence.len(),
        sequence.total_frames,
        energy_threshold
    );
    sequence
}
