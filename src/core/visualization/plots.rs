// src/core/visualization/plots.rs
//
// PNG plots of the analyzed waveform and the dominant frequency sequence

use image::{ImageBuffer, Rgb};
use log::debug;
use std::path::Path;

use crate::core::analysis::{DominantFrequencySequence, VOICE_TYPE_THRESHOLD_HZ};
use crate::core::signal::AudioSignal;
use crate::error::{AnalysisError, Result};

pub type PlotImage = ImageBuffer<Rgb<u8>, Vec<u8>>;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([200, 200, 200]);
const TRACE: Rgb<u8> = Rgb([31, 119, 180]);
const THRESHOLD: Rgb<u8> = Rgb([214, 39, 40]);

/// Plot configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 400,
            margin: 20,
        }
    }
}

impl PlotConfig {
    fn inner_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin).max(1)
    }

    fn inner_height(&self) -> u32 {
        self.height.saturating_sub(2 * self.margin).max(1)
    }
}

/// Time vs amplitude, one min/max column per pixel
pub fn render_waveform(signal: &AudioSignal, config: &PlotConfig) -> PlotImage {
    let mut img = PlotImage::from_pixel(config.width, config.height, BACKGROUND);
    let samples = signal.samples();
    let width = config.inner_width();
    let height = config.inner_height();
    let peak = signal.peak().max(f32::EPSILON);

    let to_y = |v: f32| -> u32 {
        let normalized = (1.0 - (v / peak).clamp(-1.0, 1.0)) / 2.0;
        config.margin + (normalized * (height - 1) as f32).round() as u32
    };

    draw_hline(&mut img, config, to_y(0.0), AXIS, false);

    let per_column = samples.len() as f64 / width as f64;
    for x in 0..width {
        let start = (x as f64 * per_column) as usize;
        let end = (((x + 1) as f64 * per_column) as usize).clamp(start + 1, samples.len());
        if start >= samples.len() {
            break;
        }
        let (lo, hi) = samples[start..end]
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));
        draw_vline(&mut img, config.margin + x, to_y(hi), to_y(lo), TRACE);
    }

    img
}

/// Frame index vs dominant frequency, with the voice-type threshold marked
pub fn render_frequency_plot(sequence: &DominantFrequencySequence, config: &PlotConfig) -> PlotImage {
    let mut img = PlotImage::from_pixel(config.width, config.height, BACKGROUND);
    let width = config.inner_width();
    let height = config.inner_height();

    let max_freq = sequence
        .frequencies
        .iter()
        .copied()
        .fold(VOICE_TYPE_THRESHOLD_HZ * 1.5, f64::max)
        * 1.1;

    let to_y = |hz: f64| -> u32 {
        let normalized = 1.0 - (hz / max_freq).clamp(0.0, 1.0);
        config.margin + (normalized * (height - 1) as f64).round() as u32
    };
    let count = sequence.frequencies.len();
    let to_x = |i: usize| -> u32 {
        if count <= 1 {
            config.margin + width / 2
        } else {
            config.margin + (i as f64 / (count - 1) as f64 * (width - 1) as f64).round() as u32
        }
    };

    draw_hline(&mut img, config, to_y(0.0), AXIS, false);
    draw_hline(&mut img, config, to_y(VOICE_TYPE_THRESHOLD_HZ), THRESHOLD, true);

    let points: Vec<(u32, u32)> = sequence
        .frequencies
        .iter()
        .enumerate()
        .map(|(i, &hz)| (to_x(i), to_y(hz)))
        .collect();

    if let [only] = points.as_slice() {
        put(&mut img, only.0, only.1, TRACE);
    }
    for pair in points.windows(2) {
        draw_line(&mut img, pair[0], pair[1], TRACE);
    }

    img
}

pub fn save_waveform(signal: &AudioSignal, config: &PlotConfig, path: &Path) -> Result<()> {
    save(&render_waveform(signal, config), path)
}

pub fn save_frequency_plot(
    sequence: &DominantFrequencySequence,
    config: &PlotConfig,
    path: &Path,
) -> Result<()> {
    save(&render_frequency_plot(sequence, config), path)
}

fn save(img: &PlotImage, path: &Path) -> Result<()> {
    img.save(path)
        .map_err(|e| AnalysisError::Render(format!("{}: {}", path.display(), e)))?;
    debug!("Saved plot to {}", path.display());
    Ok(())
}

fn put(img: &mut PlotImage, x: u32, y: u32, color: Rgb<u8>) {
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

fn draw_hline(img: &mut PlotImage, config: &PlotConfig, y: u32, color: Rgb<u8>, dashed: bool) {
    for x in config.margin..config.margin + config.inner_width() {
        if !dashed || (x / 6) % 2 == 0 {
            put(img, x, y, color);
        }
    }
}

fn draw_vline(img: &mut PlotImage, x: u32, y0: u32, y1: u32, color: Rgb<u8>) {
    for y in y0.min(y1)..=y0.max(y1) {
        put(img, x, y, color);
    }
}

// Bresenham
fn draw_line(img: &mut PlotImage, from: (u32, u32), to: (u32, u32), color: Rgb<u8>) {
    let (mut x, mut y) = (from.0 as i64, from.1 as i64);
    let (x1, y1) = (to.0 as i64, to.1 as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x as u32, y as u32, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
