//! Report types for analyzed files

mod result;

pub use result::{AnalysisOutcome, AnalysisReport, BatchSummary, FileInfo};

#[cfg(test)]
pub(crate) use result::sample_report;
