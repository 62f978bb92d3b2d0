// tests/test_utils/mod.rs
//
// Shared helpers: fixture directories, synthetic WAVs and the CLI binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use voicecheckr::testgen::{write_wav, ToneSpec};

pub const SAMPLE_RATE: u32 = 8000;

/// Temporary fixture directory, removed on drop
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("voicecheckr-test-{}-", name))
            .tempdir()
            .expect("Failed to create fixture directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a WAV fixture and return its path
    pub fn wav(&self, file_name: &str, spec: &ToneSpec) -> PathBuf {
        let path = self.path().join(file_name);
        write_wav(&path, spec).expect("Failed to write WAV fixture");
        path
    }

    pub fn male_voice(&self) -> PathBuf {
        self.wav("male.wav", &ToneSpec::voice_like(120.0, SAMPLE_RATE, 2.0))
    }

    pub fn female_voice(&self) -> PathBuf {
        self.wav("female.wav", &ToneSpec::voice_like(220.0, SAMPLE_RATE, 2.0))
    }

    pub fn silence(&self) -> PathBuf {
        self.wav("silence.wav", &ToneSpec::silence(SAMPLE_RATE, 2.0))
    }
}

/// Command for the built binary, isolated from the user's profile settings
pub fn voicecheckr() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_voicecheckr"));
    cmd.env_remove("VOICECHECKR_PROFILE");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run_json_analysis(paths: &[&Path]) -> (Output, serde_json::Value) {
    let output = voicecheckr()
        .arg("--profile")
        .arg("standard")
        .arg("--json")
        .args(paths)
        .output()
        .expect("Failed to execute voicecheckr");
    let value = serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    (output, value)
}
