// src/testgen/mod.rs
//
// Synthetic test signal generation for VoiceCheckr.
// Writes tones, harmonic "voices" and silence as WAV files with hound so
// tests and manual checks have fixtures with a known dominant frequency.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::Path;

/// Sample encoding of generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavEncoding {
    Pcm16,
    Float32,
}

/// A synthetic signal description
#[derive(Debug, Clone)]
pub struct ToneSpec {
    pub sample_rate: u32,
    pub duration_secs: f64,
    /// (frequency Hz, amplitude) partials summed together
    pub partials: Vec<(f64, f64)>,
    pub channels: u16,
    pub encoding: WavEncoding,
}

impl ToneSpec {
    /// Single sine wave, mono, 16-bit
    pub fn sine(frequency: f64, amplitude: f64, sample_rate: u32, duration_secs: f64) -> Self {
        Self {
            sample_rate,
            duration_secs,
            partials: vec![(frequency, amplitude)],
            channels: 1,
            encoding: WavEncoding::Pcm16,
        }
    }

    /// Fundamental with decaying harmonics; the fundamental stays dominant
    pub fn voice_like(fundamental: f64, sample_rate: u32, duration_secs: f64) -> Self {
        Self {
            sample_rate,
            duration_secs,
            partials: vec![
                (fundamental, 0.6),
                (fundamental * 2.0, 0.25),
                (fundamental * 3.0, 0.1),
            ],
            channels: 1,
            encoding: WavEncoding::Pcm16,
        }
    }

    pub fn silence(sample_rate: u32, duration_secs: f64) -> Self {
        Self {
            sample_rate,
            duration_secs,
            partials: Vec::new(),
            channels: 1,
            encoding: WavEncoding::Pcm16,
        }
    }

    pub fn with_channels(mut self, channels: u16) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_encoding(mut self, encoding: WavEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Mono samples of the described signal
    pub fn samples(&self) -> Vec<f32> {
        let len = (self.sample_rate as f64 * self.duration_secs).round() as usize;
        (0..len)
            .map(|i| {
                let t = i as f64 / self.sample_rate as f64;
                self.partials
                    .iter()
                    .map(|&(f, a)| a * (2.0 * PI * f * t).sin())
                    .sum::<f64>() as f32
            })
            .collect()
    }
}

/// Write `spec` as a WAV file, duplicating the signal into every channel
pub fn write_wav(path: &Path, spec: &ToneSpec) -> Result<()> {
    let (bits_per_sample, sample_format) = match spec.encoding {
        WavEncoding::Pcm16 => (16, SampleFormat::Int),
        WavEncoding::Float32 => (32, SampleFormat::Float),
    };
    let wav_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample,
        sample_format,
    };

    let mut writer = WavWriter::create(path, wav_spec)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for sample in spec.samples() {
        for _ in 0..spec.channels {
            match spec.encoding {
                WavEncoding::Pcm16 => {
                    let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
                    writer.write_sample(value)?;
                }
                WavEncoding::Float32 => writer.write_sample(sample)?,
            }
        }
    }

    writer.finalize().context("Failed to finalize WAV file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        let spec = ToneSpec::sine(125.0, 0.5, 8000, 1.5);
        assert_eq!(spec.samples().len(), 12000);
    }

    #[test]
    fn test_silence_is_zero() {
        assert!(ToneSpec::silence(8000, 0.5).samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_write_stereo_wav() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = ToneSpec::sine(250.0, 0.5, 8000, 0.25).with_channels(2);
        write_wav(&path, &spec).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.len(), 4000);
    }
}
