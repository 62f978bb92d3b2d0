// tests/integration_test.rs
//
// End-to-end tests: WAV fixtures written with hound, decoded with symphonia,
// classified through the library API, the upload path and the CLI binary.

mod test_utils;

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use test_utils::{run_json_analysis, voicecheckr, FixtureDir, SAMPLE_RATE};
use voicecheckr::testgen::{ToneSpec, WavEncoding};
use voicecheckr::{
    analyze_upload, AnalysisConfig, AnalysisError, ErrorKind, VoiceAnalyzer, VoiceType,
};

#[test]
fn test_wav_files_are_classified() {
    let dir = FixtureDir::new("classify");
    let analyzer = VoiceAnalyzer::new();

    let male = analyzer.analyze_file(dir.male_voice()).unwrap();
    assert_eq!(male.result.label, VoiceType::Male);
    assert!(male.result.average_frequency < 150.0);
    assert_eq!(male.audio.sample_rate, SAMPLE_RATE);
    assert_eq!(male.audio.channels, 1);

    let female = analyzer.analyze_file(dir.female_voice()).unwrap();
    assert_eq!(female.result.label, VoiceType::Female);
    assert!(female.result.average_frequency > 200.0);
}

#[test]
fn test_silent_wav_reports_no_voice() {
    let dir = FixtureDir::new("silence");
    let err = VoiceAnalyzer::new().analyze_file(dir.silence()).unwrap_err();
    assert!(matches!(err, AnalysisError::NoVoiceDetected));
    assert_eq!(err.user_message(), "could not analyze audio, try another file");
}

#[test]
fn test_stereo_file_matches_mono_file() {
    let dir = FixtureDir::new("stereo");
    let spec = ToneSpec::voice_like(130.0, SAMPLE_RATE, 2.0);
    let mono = dir.wav("mono.wav", &spec);
    let stereo = dir.wav("stereo.wav", &spec.clone().with_channels(2));

    let analyzer = VoiceAnalyzer::new();
    let mono_run = analyzer.analyze_file(&mono).unwrap();
    let stereo_run = analyzer.analyze_file(&stereo).unwrap();

    assert_eq!(stereo_run.audio.channels, 2);
    assert_eq!(mono_run.result, stereo_run.result);
}

#[test]
fn test_float_wav_decodes() {
    let dir = FixtureDir::new("float");
    let path = dir.wav(
        "float.wav",
        &ToneSpec::sine(250.0, 0.8, SAMPLE_RATE, 1.0).with_encoding(WavEncoding::Float32),
    );

    let run = VoiceAnalyzer::new().analyze_file(&path).unwrap();
    assert_eq!(run.result.label, VoiceType::Female);
    assert_eq!(run.result.average_frequency, 250.0);
}

#[test]
fn test_missing_file_is_a_processing_error() {
    let err = VoiceAnalyzer::new()
        .analyze_file("/nonexistent/dir/voice.wav")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(err.user_message(), "could not process file");
}

fn leftover_uploads() -> HashSet<PathBuf> {
    fs::read_dir(std::env::temp_dir())
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| n.starts_with("voicecheckr-") && !n.starts_with("voicecheckr-test-"))
                        .unwrap_or(false)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_upload_cleans_up_temp_file() {
    let dir = FixtureDir::new("upload");
    let before = leftover_uploads();

    let bytes = fs::read(dir.female_voice()).unwrap();
    let run = analyze_upload(&bytes, Some("wav"), &AnalysisConfig::default()).unwrap();
    assert_eq!(run.result.label, VoiceType::Female);
    assert!(!run.path.exists());

    let err = analyze_upload(b"RIFF but not really", Some("wav"), &AnalysisConfig::default())
        .unwrap_err();
    assert_eq!(err.user_message(), "could not process file");

    let silent = fs::read(dir.silence()).unwrap();
    let err = analyze_upload(&silent, Some("wav"), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::NoVoiceDetected));

    let after = leftover_uploads();
    assert!(after.is_subset(&before), "temp files left behind: {:?}", after.difference(&before));
}

#[test]
fn test_cli_json_batch() {
    let dir = FixtureDir::new("cli-json");
    dir.male_voice();
    dir.female_voice();
    dir.silence();
    fs::write(dir.path().join("notes.txt"), "not audio").unwrap();

    let (output, value) = run_json_analysis(&[dir.path()]);

    // silence.wav fails, so the batch reports failure
    assert_eq!(output.status.code(), Some(1));

    let outcomes = value.as_array().expect("JSON array");
    assert_eq!(outcomes.len(), 3);

    let by_name = |name: &str| {
        outcomes
            .iter()
            .find(|o| {
                o["file"]["path"].as_str().map_or(false, |p| p.ends_with(name))
                    || o["path"].as_str().map_or(false, |p| p.ends_with(name))
            })
            .unwrap_or_else(|| panic!("{} missing from output", name))
    };

    assert_eq!(by_name("male.wav")["status"], "success");
    assert_eq!(by_name("male.wav")["result"]["label"], "male");
    assert_eq!(by_name("female.wav")["result"]["label"], "female");
    assert_eq!(by_name("female.wav")["profile"], "standard");
    assert_eq!(by_name("silence.wav")["status"], "failure");
    assert_eq!(by_name("silence.wav")["kind"], "no_voice");
}

#[test]
fn test_cli_text_output_and_plots() {
    let dir = FixtureDir::new("cli-text");
    let female = dir.female_voice();
    let plots = dir.path().join("plots");

    let output = voicecheckr()
        .arg("--profile=standard")
        .arg("--plots")
        .arg(&plots)
        .arg(&female)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Voice type:"));
    assert!(stdout.contains("female"));
    assert!(stdout.contains("Average frequency:"));

    assert!(plots.join("female_waveform.png").is_file());
    assert!(plots.join("female_frequencies.png").is_file());
}

#[test]
fn test_cli_rejects_bad_config() {
    let dir = FixtureDir::new("cli-config");
    let female = dir.female_voice();

    let output = voicecheckr()
        .args(["--profile=standard", "--frame-size=256", "--overlap=512"])
        .arg(&female)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_config_file() {
    let dir = FixtureDir::new("cli-config-file");
    let male = dir.male_voice();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "frame_size": 4096, "overlap": 1024 }"#).unwrap();

    let output = voicecheckr()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg(&male)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["config"]["frame_size"], 4096);
    assert_eq!(value[0]["profile"], "custom");
    assert_eq!(value[0]["result"]["label"], "male");
}
