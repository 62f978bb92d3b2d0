//! Output formatting for CLI results

use colorful::Colorful;

use crate::core::analysis::VoiceType;
use crate::report::{AnalysisOutcome, AnalysisReport, BatchSummary};

/// Format one outcome for terminal output
pub fn format_outcome(outcome: &AnalysisOutcome, verbose: bool) -> String {
    match outcome {
        AnalysisOutcome::Success(report) => format_report(report, verbose),
        AnalysisOutcome::Failure { path, message, detail, .. } => {
            let mut output = format!("{} {}\n", "✗".red(), path.clone().bold());
            output.push_str(&format!("  {}\n", message.clone().red()));
            if verbose {
                output.push_str(&format!("  Cause: {}\n", detail));
            }
            output
        }
    }
}

fn format_report(report: &AnalysisReport, verbose: bool) -> String {
    let result = &report.result;
    let sequence = &result.frequency_sequence;

    let label = match result.label {
        VoiceType::Male => result.label.to_string().cyan(),
        VoiceType::Female => result.label.to_string().magenta(),
    };

    let mut output = format!(
        "{} {} [{}]\n",
        "✓".green(),
        report.file.path.clone().bold(),
        report.profile
    );
    output.push_str(&format!("  Voice type: {}\n", label));
    output.push_str(&format!(
        "  Average frequency: {:.2} Hz\n",
        result.average_frequency
    ));
    output.push_str(&format!(
        "  Voiced frames: {}/{} ({:.0}%)\n",
        sequence.len(),
        sequence.total_frames,
        sequence.coverage() * 100.0
    ));

    if verbose {
        let file = &report.file;
        let config = &report.config;
        output.push_str("\n  Technical Details:\n");
        output.push_str(&format!(
            "    Sample Rate: {} Hz, Channels: {}, Duration: {:.2}s, Codec: {}\n",
            file.sample_rate, file.channels, file.duration_secs, file.codec
        ));
        output.push_str(&format!(
            "    Frame: {} / overlap {} / threshold {} / normalize {}\n",
            config.frame_size, config.overlap, config.energy_threshold, config.peak_normalize
        ));
        output.push_str(&format!(
            "    Window: {:?}, Scaling: {:?}\n",
            config.window, config.scaling
        ));
        if let (Some(lo), Some(hi)) = (
            sequence.frequencies.iter().copied().reduce(f64::min),
            sequence.frequencies.iter().copied().reduce(f64::max),
        ) {
            output.push_str(&format!("    Dominant range: {:.2} - {:.2} Hz\n", lo, hi));
        }
        if !file.md5.is_empty() {
            output.push_str(&format!("    MD5: {}\n", file.md5));
        }
    }

    output
}

/// Format outcomes as a JSON array
pub fn format_json(outcomes: &[AnalysisOutcome]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcomes)
}

/// Format a summary for multiple files
pub fn format_summary(summary: &BatchSummary) -> String {
    let mut output = format!("\n{}\n", "Summary:".bold());
    output.push_str(&format!("  {} files analyzed\n", summary.total));

    if summary.male > 0 {
        output.push_str(&format!("  {}\n", format!("{} male", summary.male).cyan()));
    }
    if summary.female > 0 {
        output.push_str(&format!("  {}\n", format!("{} female", summary.female).magenta()));
    }
    if summary.failed > 0 {
        output.push_str(&format!("  {}\n", format!("✗ {} failed", summary.failed).red()));
    }

    output
}
