//! Visualization tools for analysis results
//!
//! Waveform and dominant-frequency plots rendered to PNG.

mod plots;

pub use plots::{
    render_frequency_plot, render_waveform, save_frequency_plot, save_waveform, PlotConfig,
    PlotImage,
};
