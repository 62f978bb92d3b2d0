//! Core analysis modules

pub mod analysis;
pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod signal;
pub mod upload;
pub mod visualization;

pub use analysis::{ClassificationResult, DominantFrequencySequence, VoiceType};
pub use analyzer::{classify, AnalysisRun, VoiceAnalyzer};
pub use decoder::{decode_audio, decode_bytes, DecodedAudio};
pub use signal::AudioSignal;
pub use upload::analyze_upload;
