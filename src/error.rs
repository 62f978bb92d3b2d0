//! Error types for decoding and analysis

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a file into samples.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or corrupted audio: {0}")]
    Format(#[from] symphonia::core::errors::Error),

    #[error("no supported audio track found")]
    NoTrack,

    #[error("file does not specify a sample rate")]
    MissingSampleRate,

    #[error("file reports 0 audio channels")]
    ZeroChannels,

    #[error("no audio samples decoded")]
    NoSamples,
}

/// Failures of a single analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid signal: {0}")]
    InvalidSignal(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("signal has {samples} samples, fewer than one {frame_size}-sample frame")]
    SignalTooShort { samples: usize, frame_size: usize },

    #[error("no frame exceeded the energy threshold")]
    NoVoiceDetected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render plot: {0}")]
    Render(String),
}

/// Coarse error category reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Decode,
    NoVoice,
    InvalidInput,
    Io,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Decode(DecodeError::Open { .. }) => ErrorKind::Io,
            AnalysisError::Decode(_) => ErrorKind::Decode,
            AnalysisError::NoVoiceDetected | AnalysisError::SignalTooShort { .. } => {
                ErrorKind::NoVoice
            }
            AnalysisError::InvalidSignal(_) | AnalysisError::InvalidConfig(_) => {
                ErrorKind::InvalidInput
            }
            AnalysisError::Io(_) | AnalysisError::Render(_) => ErrorKind::Io,
        }
    }

    /// Message shown to the end user instead of the raw error.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Decode | ErrorKind::Io => "could not process file",
            ErrorKind::NoVoice => "could not analyze audio, try another file",
            ErrorKind::InvalidInput => "invalid analysis input",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
