use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a single processed file. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSummary {
    pub file_path: String,
    pub file_name: String,
    pub summary: String,
    pub file_size: u64,
    /// ISO-8601 local timestamp taken when the file was processed
    pub processed_at: String,
}

/// One processing invocation: where to look, where the report goes,
/// and how loud the logs are.
#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    pub directory: PathBuf,
    pub output: Option<PathBuf>,
    pub log_level: String,
}

/// Aggregate result of one run, serialized as the final JSON report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryReport {
    pub total_files: usize,
    pub processed_files: usize,
    pub skipped_files: usize,
    pub summaries: Vec<FileSummary>,
    /// Elapsed wall-clock time in milliseconds
    pub processing_time: u64,
}

impl SummaryReport {
    /// Build the report from the accumulated summaries and the elapsed
    /// wall-clock time. Counts are derived from the summaries themselves;
    /// `skipped_files` stays 0 because a per-file failure aborts the run
    /// instead of skipping.
    pub fn new(summaries: Vec<FileSummary>, elapsed: Duration) -> Self {
        Self {
            total_files: summaries.len(),
            processed_files: summaries.len(),
            skipped_files: 0,
            summaries,
            processing_time: elapsed.as_millis() as u64,
        }
    }
}
