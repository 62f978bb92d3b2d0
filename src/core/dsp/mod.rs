//! Digital Signal Processing utilities

mod spectrogram;
mod windows;

pub use spectrogram::{Spectrogram, SpectrogramBuilder, SpectrogramFrame, SpectrumScaling};
pub use windows::WindowFunction;
