// src/core/upload.rs
//
// Uploaded bytes are written to a scoped temporary file, decoded from disk
// and classified. The file is owner-only and is removed when it drops, on
// every path.

use log::debug;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

use super::analyzer::{AnalysisRun, VoiceAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::Result;

const TEMP_PREFIX: &str = "voicecheckr-";

/// Write `bytes` to a fresh temp file; `extension` becomes its suffix
fn write_temp_audio(bytes: &[u8], extension: Option<&str>) -> Result<NamedTempFile> {
    let suffix = extension.map(|ext| format!(".{}", ext)).unwrap_or_default();
    let mut file = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(&suffix)
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    debug!("Wrote {} bytes to {}", bytes.len(), file.path().display());
    Ok(file)
}

/// Analyze an uploaded file held in memory
pub fn analyze_upload(
    bytes: &[u8],
    extension: Option<&str>,
    config: &AnalysisConfig,
) -> Result<AnalysisRun> {
    let temp = write_temp_audio(bytes, extension)?;
    VoiceAnalyzer::with_config(config.clone()).analyze_file(temp.path())
}
