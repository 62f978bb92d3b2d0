//! Voice analysis algorithms
//!
//! - Dominant frequency extraction (peak bin per frame above an energy threshold)
//! - Voice-type classification (mean dominant frequency against 150 Hz)

mod classifier;
mod dominant;

pub use classifier::{classify_sequence, ClassificationResult, VoiceType, VOICE_TYPE_THRESHOLD_HZ};
pub use dominant::{extract_dominant_frequencies, DominantFrequencySequence};
