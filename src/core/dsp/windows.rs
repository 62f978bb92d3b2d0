//! Window function implementations

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window applied to each frame before the transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    Rectangular,
    Hann,
    Hamming,
    Blackman,
    /// Tapered cosine; the parameter is the tapered fraction (0 = rectangular, 1 = Hann)
    Tukey(f64),
}

impl Default for WindowFunction {
    fn default() -> Self {
        Self::Tukey(0.25)
    }
}

impl WindowFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "rectangular" | "boxcar" | "none" => Some(Self::Rectangular),
            "hann" | "hanning" => Some(Self::Hann),
            "hamming" => Some(Self::Hamming),
            "blackman" => Some(Self::Blackman),
            "tukey" => Some(Self::default()),
            other => other
                .strip_prefix("tukey:")
                .and_then(|alpha| alpha.parse().ok())
                .map(Self::Tukey),
        }
    }

    /// Periodic (DFT-even) coefficients of length `size`
    pub fn generate(&self, size: usize) -> Vec<f64> {
        let n = size as f64;
        match *self {
            WindowFunction::Rectangular => vec![1.0; size],
            WindowFunction::Hann => (0..size)
                .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / n).cos()))
                .collect(),
            WindowFunction::Hamming => (0..size)
                .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / n).cos())
                .collect(),
            WindowFunction::Blackman => (0..size)
                .map(|i| {
                    let x = 2.0 * PI * i as f64 / n;
                    0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos()
                })
                .collect(),
            WindowFunction::Tukey(alpha) => {
                let mut w = tukey_symmetric(size + 1, alpha);
                w.truncate(size);
                w
            }
        }
    }
}

fn tukey_symmetric(m: usize, alpha: f64) -> Vec<f64> {
    if m <= 1 {
        return vec![1.0; m];
    }
    if alpha <= 0.0 {
        return vec![1.0; m];
    }
    let span = (m - 1) as f64;
    if alpha >= 1.0 {
        return (0..m)
            .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / span).cos()))
            .collect();
    }

    let width = (alpha * span / 2.0).floor() as usize;
    (0..m)
        .map(|i| {
            let x = i as f64;
            if i <= width {
                0.5 * (1.0 + (PI * (-1.0 + 2.0 * x / (alpha * span))).cos())
            } else if i < m - width - 1 {
                1.0
            } else {
                0.5 * (1.0 + (PI * (-2.0 / alpha + 1.0 + 2.0 * x / (alpha * span))).cos())
            }
        })
        .collect()
}
