//! Per-file analysis outcomes as presented to users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::core::analysis::{ClassificationResult, VoiceType};
use crate::core::analyzer::AnalysisRun;
use crate::error::{AnalysisError, ErrorKind};

/// Source file details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: String,
    pub md5: String,
    pub codec: String,
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
}

/// A successful classification of one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub file: FileInfo,
    pub profile: String,
    pub config: AnalysisConfig,
    pub result: ClassificationResult,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn from_run(run: &AnalysisRun, config: &AnalysisConfig, digest: Option<md5::Digest>) -> Self {
        let md5 = digest.map(|d| format!("{:x}", d)).unwrap_or_default();

        Self {
            file: FileInfo {
                path: run.path.display().to_string(),
                md5,
                codec: run.audio.codec_name.clone(),
                sample_rate: run.audio.sample_rate,
                channels: run.audio.channels,
                duration_secs: run.audio.duration_secs,
            },
            profile: config.profile_name().to_string(),
            config: config.clone(),
            result: run.result.clone(),
            analyzed_at: Utc::now(),
        }
    }

    pub fn label(&self) -> VoiceType {
        self.result.label
    }
}

/// Success or a structured failure; one per analyzed file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Success(AnalysisReport),
    Failure {
        path: String,
        kind: ErrorKind,
        message: String,
        detail: String,
    },
}

impl AnalysisOutcome {
    pub fn failure(path: &Path, error: &AnalysisError) -> Self {
        AnalysisOutcome::Failure {
            path: path.display().to_string(),
            kind: error.kind(),
            message: error.user_message().to_string(),
            detail: error.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            AnalysisOutcome::Success(report) => &report.file.path,
            AnalysisOutcome::Failure { path, .. } => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }
}

/// Counts over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub male: usize,
    pub female: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[AnalysisOutcome]) -> Self {
        outcomes.iter().fold(
            Self {
                total: outcomes.len(),
                ..Default::default()
            },
            |mut summary, outcome| {
                match outcome {
                    AnalysisOutcome::Success(report) => match report.label() {
                        VoiceType::Male => summary.male += 1,
                        VoiceType::Female => summary.female += 1,
                    },
                    AnalysisOutcome::Failure { .. } => summary.failed += 1,
                }
                summary
            },
        )
    }
}

#[cfg(test)]
pub(crate) fn sample_report(label: VoiceType, average: f64) -> AnalysisReport {
    use crate::core::analysis::DominantFrequencySequence;
    use crate::core::decoder::DecodedAudio;
    use crate::core::signal::AudioSignal;
    use std::path::PathBuf;

    let run = AnalysisRun {
        path: PathBuf::from("voice.wav"),
        audio: DecodedAudio {
            samples: vec![0.1, 0.2],
            sample_rate: 16000,
            channels: 1,
            duration_secs: 2.0,
            codec_name: "pcm_s16le".to_string(),
        },
        signal: AudioSignal::new(vec![0.1, 0.2], 16000).unwrap(),
        result: ClassificationResult {
            label,
            average_frequency: average,
            frequency_sequence: DominantFrequencySequence {
                frequencies: vec![average],
                frame_indices: vec![0],
                total_frames: 2,
            },
        },
    };
    AnalysisReport::from_run(&run, &AnalysisConfig::default(), Some(md5::compute(b"abc")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata() {
        let report = sample_report(VoiceType::Male, 120.0);
        assert_eq!(report.file.md5, "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(report.profile, "standard");
        assert_eq!(report.file.codec, "pcm_s16le");
    }

    #[test]
    fn test_failure_outcome() {
        let outcome =
            AnalysisOutcome::failure(Path::new("a.wav"), &AnalysisError::NoVoiceDetected);
        assert!(!outcome.is_success());
        assert_eq!(outcome.path(), "a.wav");
        match outcome {
            AnalysisOutcome::Failure { kind, message, .. } => {
                assert_eq!(kind, ErrorKind::NoVoice);
                assert_eq!(message, "could not analyze audio, try another file");
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_batch_summary() {
        let outcomes = vec![
            AnalysisOutcome::Success(sample_report(VoiceType::Male, 120.0)),
            AnalysisOutcome::Success(sample_report(VoiceType::Female, 210.0)),
            AnalysisOutcome::Success(sample_report(VoiceType::Female, 190.0)),
            AnalysisOutcome::failure(Path::new("x.mp3"), &AnalysisError::NoVoiceDetected),
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(
            summary,
            BatchSummary { total: 4, male: 1, female: 2, failed: 1 }
        );
    }
}
