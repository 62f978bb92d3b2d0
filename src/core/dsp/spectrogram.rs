// src/core/dsp/spectrogram.rs
//
// Short-time spectrum over fixed-size overlapping frames.

use log::debug;
use realfft::num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::windows::WindowFunction;
use crate::error::{AnalysisError, Result};

/// How bin values are scaled after the transform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectrumScaling {
    /// One-sided power spectral density, units^2/Hz
    #[default]
    Density,
    /// One-sided amplitude, a full-scale sine peaks near its amplitude
    Magnitude,
}

impl SpectrumScaling {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "density" | "psd" => Some(Self::Density),
            "magnitude" | "amplitude" => Some(Self::Magnitude),
            _ => None,
        }
    }
}

/// One column of the spectrogram
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramFrame {
    pub index: usize,
    /// Centre of the frame in seconds
    pub time_secs: f64,
    /// One value per bin of the owning spectrogram's frequency axis
    pub magnitudes: Vec<f64>,
}

impl SpectrogramFrame {
    /// Bin with the largest value; the first one wins ties.
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.magnitudes
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, m)| match best {
                Some((_, best_m)) if m <= best_m => best,
                _ => Some((i, m)),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    /// Bin centre frequencies in Hz, shared by every frame
    pub frequencies: Vec<f64>,
    pub frames: Vec<SpectrogramFrame>,
}

impl Spectrogram {
    /// `(frequency, magnitude)` pairs of one frame
    pub fn bins<'a>(&'a self, frame: &'a SpectrogramFrame) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.frequencies
            .iter()
            .copied()
            .zip(frame.magnitudes.iter().copied())
    }

    /// Spacing between adjacent bins in Hz
    pub fn bin_width(&self) -> f64 {
        self.frequencies.get(1).copied().unwrap_or(0.0)
    }
}

/// Computes spectrograms for a fixed frame layout
pub struct SpectrogramBuilder {
    frame_size: usize,
    hop_size: usize,
    window: Vec<f64>,
    window_sum: f64,
    window_power: f64,
    scaling: SpectrumScaling,
    fft: Arc<dyn RealToComplex<f64>>,
}

impl SpectrogramBuilder {
    pub fn new(
        frame_size: usize,
        overlap: usize,
        window_fn: WindowFunction,
        scaling: SpectrumScaling,
    ) -> Result<Self> {
        // A one-sample periodic window is all zeros
        if frame_size < 2 {
            return Err(AnalysisError::InvalidConfig(format!(
                "frame_size must be at least 2, got {}",
                frame_size
            )));
        }
        if overlap >= frame_size {
            return Err(AnalysisError::InvalidConfig(format!(
                "overlap ({}) must be smaller than frame_size ({})",
                overlap, frame_size
            )));
        }

        let window = window_fn.generate(frame_size);
        let window_sum = window.iter().sum();
        let window_power = window.iter().map(|w| w * w).sum();
        let fft = RealFftPlanner::<f64>::new().plan_fft_forward(frame_size);

        Ok(Self {
            frame_size,
            hop_size: frame_size - overlap,
            window,
            window_sum,
            window_power,
            scaling,
            fft,
        })
    }

    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// Number of complete frames in a signal of `len` samples.
    /// Incomplete trailing frames are dropped.
    pub fn frame_count(&self, len: usize) -> usize {
        if len < self.frame_size {
            0
        } else {
            (len - self.frame_size) / self.hop_size + 1
        }
    }

    pub fn frequencies(&self, sample_rate: u32) -> Vec<f64> {
        let resolution = sample_rate as f64 / self.frame_size as f64;
        (0..=self.frame_size / 2)
            .map(|k| k as f64 * resolution)
            .collect()
    }

    pub fn compute(&self, samples: &[f32], sample_rate: u32) -> Result<Spectrogram> {
        let num_frames = self.frame_count(samples.len());
        if num_frames == 0 {
            return Err(AnalysisError::SignalTooShort {
                samples: samples.len(),
                frame_size: self.frame_size,
            });
        }

        let mut input = self.fft.make_input_vec();
        let mut spectrum = self.fft.make_output_vec();
        let mut frames = Vec::with_capacity(num_frames);

        for index in 0..num_frames {
            let start = index * self.hop_size;
            let segment = &samples[start..start + self.frame_size];
            let mean = segment.iter().map(|&s| s as f64).sum::<f64>() / self.frame_size as f64;

            for ((slot, &s), &w) in input.iter_mut().zip(segment).zip(&self.window) {
                *slot = (s as f64 - mean) * w;
            }

            self.fft
                .process(&mut input, &mut spectrum)
                .map_err(|e| AnalysisError::InvalidConfig(format!("FFT failed: {}", e)))?;

            frames.push(SpectrogramFrame {
                index,
                time_secs: (start + self.frame_size / 2) as f64 / sample_rate as f64,
                magnitudes: self.scale(&spectrum, sample_rate),
            });
        }

        debug!(
            "Spectrogram: {} frames x {} bins (frame {}, hop {})",
            num_frames,
            self.frame_size / 2 + 1,
            self.frame_size,
            self.hop_size
        );

        Ok(Spectrogram {
            frequencies: self.frequencies(sample_rate),
            frames,
        })
    }

    fn scale(&self, spectrum: &[Complex<f64>], sample_rate: u32) -> Vec<f64> {
        let last = spectrum.len() - 1;
        let nyquist_bin = self.frame_size % 2 == 0;

        spectrum
            .iter()
            .enumerate()
            .map(|(k, c)| {
                let value = match self.scaling {
                    SpectrumScaling::Density => {
                        c.norm_sqr() / (sample_rate as f64 * self.window_power)
                    }
                    SpectrumScaling::Magnitude => c.norm() / self.window_sum,
                };
                let one_sided = k != 0 && !(nyquist_bin && k == last);
                if one_sided {
                    value * 2.0
                } else {
                    value
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin()) as f32)
            .collect()
    }

    #[test]
    fn test_frame_layout_drops_partial_tail() {
        let builder =
            SpectrogramBuilder::new(2048, 512, WindowFunction::Hann, SpectrumScaling::Density)
                .unwrap();
        assert_eq!(builder.hop_size(), 1536);
        assert_eq!(builder.frame_count(2047), 0);
        assert_eq!(builder.frame_count(2048), 1);
        assert_eq!(builder.frame_count(2048 + 1535), 1);
        assert_eq!(builder.frame_count(2048 + 1536), 2);
    }

    #[test]
    fn test_frequency_axis() {
        let builder =
            SpectrogramBuilder::new(8, 0, WindowFunction::Rectangular, SpectrumScaling::Density)
                .unwrap();
        let freqs = builder.frequencies(8000);
        assert_eq!(freqs, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let builder = SpectrogramBuilder::new(
            1024,
            256,
            WindowFunction::default(),
            SpectrumScaling::Density,
        )
        .unwrap();
        // 8000 / 1024 = 7.8125 Hz bins; 250 Hz is bin 32
        let samples = sine(250.0, 0.8, 8000, 8000);
        let spec = builder.compute(&samples, 8000).unwrap();

        assert_eq!(spec.frames.len(), builder.frame_count(samples.len()));
        assert!((spec.bin_width() - 7.8125).abs() < 1e-12);
        for frame in &spec.frames {
            let (bin, _) = frame.peak().unwrap();
            assert_eq!(bin, 32);
            assert_eq!(spec.bins(frame).count(), 513);
        }
    }

    #[test]
    fn test_magnitude_scaling_tracks_amplitude() {
        let builder = SpectrogramBuilder::new(
            1024,
            0,
            WindowFunction::Hann,
            SpectrumScaling::Magnitude,
        )
        .unwrap();
        let samples = sine(250.0, 0.5, 8000, 1024);
        let spec = builder.compute(&samples, 8000).unwrap();
        let (_, peak) = spec.frames[0].peak().unwrap();
        assert!((peak - 0.5).abs() < 0.01, "peak {}", peak);
    }

    #[test]
    fn test_dc_is_removed() {
        let builder =
            SpectrogramBuilder::new(256, 0, WindowFunction::Hann, SpectrumScaling::Density)
                .unwrap();
        let samples = vec![0.7f32; 256];
        let spec = builder.compute(&samples, 8000).unwrap();
        assert!(spec.frames[0].magnitudes.iter().all(|&m| m < 1e-20));
    }

    #[test]
    fn test_too_short_signal() {
        let builder =
            SpectrogramBuilder::new(2048, 512, WindowFunction::Hann, SpectrumScaling::Density)
                .unwrap();
        let result = builder.compute(&[0.1; 100], 8000);
        assert!(matches!(
            result,
            Err(AnalysisError::SignalTooShort { samples: 100, frame_size: 2048 })
        ));
    }

    #[test]
    fn test_single_sample_frame_rejected() {
        assert!(matches!(
            SpectrogramBuilder::new(1, 0, WindowFunction::Hann, SpectrumScaling::Density),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_overlap() {
        assert!(SpectrogramBuilder::new(256, 256, WindowFunction::Hann, SpectrumScaling::Density)
            .is_err());
    }

    #[test]
    fn test_peak_prefers_first_maximum() {
        let frame = SpectrogramFrame {
            index: 0,
            time_secs: 0.0,
            magnitudes: vec![0.1, 0.5, 0.5, 0.2],
        };
        assert_eq!(frame.peak(), Some((1, 0.5)));
    }
}
