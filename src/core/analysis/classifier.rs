// src/core/analysis/classifier.rs
//
// Voice type from the mean dominant frequency.
//
// This is a placeholder heuristic, not a validated classifier: typical male
// fundamentals sit around 85-180 Hz and female ones around 165-255 Hz, the
// ranges overlap, and the dominant bin is often a harmonic or formant rather
// than the fundamental.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dominant::DominantFrequencySequence;
use crate::error::{AnalysisError, Result};

/// Averages below this are labelled male
pub const VOICE_TYPE_THRESHOLD_HZ: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    Male,
    Female,
}

impl VoiceType {
    pub fn from_average(average_hz: f64) -> Self {
        if average_hz < VOICE_TYPE_THRESHOLD_HZ {
            VoiceType::Male
        } else {
            VoiceType::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceType::Male => "male",
            VoiceType::Female => "female",
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: VoiceType,
    pub average_frequency: f64,
    pub frequency_sequence: DominantFrequencySequence,
}

/// Fails with `NoVoiceDetected` when no frame was accepted.
pub fn classify_sequence(sequence: DominantFrequencySequence) -> Result<ClassificationResult> {
    let average_frequency = sequence.mean().ok_or(AnalysisError::NoVoiceDetected)?;
    Ok(ClassificationResult {
        label: VoiceType::from_average(average_frequency),
        average_frequency,
        frequency_sequence: sequence,
    })
}
