// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{is_audio_file, print_profiles, Args};
pub use output::{format_json, format_outcome, format_summary};

use anyhow::{Context, Result};
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::AnalysisConfig;
use crate::core::analyzer::VoiceAnalyzer;
use crate::core::visualization::{save_frequency_plot, save_waveform, PlotConfig};
use crate::error::AnalysisError;
use crate::report::{AnalysisOutcome, AnalysisReport, BatchSummary};

/// Exit code when every file was classified
pub const EXIT_OK: i32 = 0;
/// Exit code when at least one file failed
pub const EXIT_FAILURES: i32 = 1;
/// Exit code for bad arguments or configuration
pub const EXIT_USAGE: i32 = 2;

/// Run the CLI, returning the process exit code
pub fn run(args: &Args) -> Result<i32> {
    if args.list_profiles {
        print_profiles();
        return Ok(EXIT_OK);
    }

    let config = match args.analysis_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return Ok(EXIT_USAGE);
        }
    };

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let files = collect_audio_files(&args.inputs);
    if files.is_empty() {
        eprintln!("{}", "No audio files found!".red());
        return Ok(EXIT_USAGE);
    }

    if let Some(dir) = &args.plots {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create plot directory {}", dir.display()))?;
    }

    info!("Analyzing {} file(s) with profile {}", files.len(), config.profile_name());

    let progress = if args.json || files.len() == 1 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .context("Invalid progress template")?,
    );

    let outcomes: Vec<AnalysisOutcome> = files
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| analyze_path(path, &config, args.plots.as_deref()))
        .collect();
    progress.finish_and_clear();

    if args.json {
        println!("{}", format_json(&outcomes).context("Failed to serialize results")?);
    } else {
        for outcome in &outcomes {
            println!("{}", format_outcome(outcome, args.verbose));
        }
        if outcomes.len() > 1 {
            println!("{}", format_summary(&BatchSummary::from_outcomes(&outcomes)));
        }
    }

    Ok(if outcomes.iter().all(AnalysisOutcome::is_success) {
        EXIT_OK
    } else {
        EXIT_FAILURES
    })
}

/// Expand files and directories into the audio files to analyze
pub fn collect_audio_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_audio_file(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            // Explicit files are always attempted; failures are reported per file
            files.push(input.clone());
        }
    }

    files
}

/// Analyze one file, turning every error into a reported outcome
pub fn analyze_path(path: &Path, config: &AnalysisConfig, plot_dir: Option<&Path>) -> AnalysisOutcome {
    match try_analyze_path(path, config, plot_dir) {
        Ok(report) => AnalysisOutcome::Success(report),
        Err(e) => {
            warn!("{}: {}", path.display(), e);
            AnalysisOutcome::failure(path, &e)
        }
    }
}

fn try_analyze_path(
    path: &Path,
    config: &AnalysisConfig,
    plot_dir: Option<&Path>,
) -> Result<AnalysisReport, AnalysisError> {
    let bytes = fs::read(path)?;
    let digest = md5::compute(&bytes);
    let run = VoiceAnalyzer::with_config(config.clone()).analyze_bytes(path, bytes)?;

    if let Some(dir) = plot_dir {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let plot_config = PlotConfig::default();
        save_waveform(&run.signal, &plot_config, &dir.join(format!("{}_waveform.png", stem)))?;
        save_frequency_plot(
            &run.result.frequency_sequence,
            &plot_config,
            &dir.join(format!("{}_frequencies.png", stem)),
        )?;
    }

    Ok(AnalysisReport::from_run(&run, config, Some(digest)))
}
