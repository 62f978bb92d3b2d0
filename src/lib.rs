//! VoiceCheckr - Coarse voice-type classification
//!
//! Decodes an audio file, computes a spectrogram, keeps the strongest
//! frequency of every frame that clears an energy threshold, averages those
//! frequencies and labels the recording `male` (below 150 Hz) or `female`.
//!
//! The 150 Hz rule is a placeholder heuristic. It ignores formants and
//! harmonics, and male and female pitch ranges overlap; do not treat the
//! label as ground truth.
//!
//! ## Module Structure
//!
//! - `core` - Decoding, signal preparation, spectrogram and classification
//! - `cli` - Command-line interface
//! - `config` - Analysis profiles and config files
//! - `report` - Per-file outcomes and batch summaries
//! - `testgen` - Synthetic WAV fixtures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voicecheckr::{classify, AnalysisConfig, AudioSignal};
//!
//! let signal = AudioSignal::new(samples, 16000)?;
//! let result = classify(&signal, &AnalysisConfig::default())?;
//!
//! println!("{} ({:.2} Hz)", result.label, result.average_frequency);
//! ```
//!
//! ## Profiles
//!
//! | Profile  | Frame | Overlap | Threshold | Peak normalize |
//! |----------|-------|---------|-----------|----------------|
//! | standard | 2048  | 512     | 0.01      | no             |
//! | basic    | 256   | 32      | 0.1       | yes            |

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Configuration and profiles
pub mod config;

// Error types
pub mod error;

// Analysis report types
pub mod report;

// Synthetic fixtures
pub mod testgen;

pub use config::{AnalysisConfig, ConfigBuilder, ProfilePreset};
pub use crate::core::{
    analyze_upload, classify, AnalysisRun, AudioSignal, ClassificationResult, DecodedAudio,
    DominantFrequencySequence, VoiceAnalyzer, VoiceType,
};
pub use error::{AnalysisError, DecodeError, ErrorKind};
pub use report::{AnalysisOutcome, AnalysisReport, BatchSummary};
