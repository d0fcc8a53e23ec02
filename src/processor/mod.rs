//! Directory processing pipeline
//!
//! Lists one level of a directory, keeps the entries that look like text
//! files, and runs each one through the summarizer in sequence. The run is
//! all-or-nothing: the first read or summarization failure aborts it.

pub mod filter;

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::{FileSummary, ProcessingRequest};
use crate::error::{Error, Result};
use crate::llm::FileSummarizer;

pub use filter::TextFileFilter;

pub struct FileProcessor {
    summarizer: FileSummarizer,
}

impl FileProcessor {
    pub fn new(summarizer: FileSummarizer) -> Self {
        Self { summarizer }
    }

    /// Process every eligible text file directly inside the requested
    /// directory, one at a time, in listing order. Returns the accumulated
    /// summaries, or the first error encountered.
    pub async fn process_directory(
        &self,
        request: &ProcessingRequest,
    ) -> Result<Vec<FileSummary>> {
        let directory = &request.directory;
        info!(directory = %directory.display(), "starting to process directory");

        if !directory.exists() {
            return Err(Error::DirectoryNotFound {
                path: directory.clone(),
            });
        }

        let files = self.files_in_directory(directory)?;
        info!(count = files.len(), "found text files to process");

        let mut summaries = Vec::with_capacity(files.len());
        for (i, file_path) in files.iter().enumerate() {
            let summary = self.process_file(file_path).await?;
            summaries.push(summary);
            debug!(
                current = i + 1,
                total = files.len(),
                file = %file_path.display(),
                "processed file"
            );
        }

        info!(processed = summaries.len(), "successfully processed files");
        Ok(summaries)
    }

    fn files_in_directory(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| Error::DirectoryRead {
                path: directory.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if TextFileFilter::is_text_file(&name) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    async fn process_file(&self, file_path: &Path) -> Result<FileSummary> {
        let metadata = std::fs::metadata(file_path).map_err(|source| Error::FileRead {
            path: file_path.to_path_buf(),
            source,
        })?;

        // read_to_string surfaces both I/O failures and invalid UTF-8
        let content = std::fs::read_to_string(file_path).map_err(|source| Error::FileRead {
            path: file_path.to_path_buf(),
            source,
        })?;

        let summary = self.summarizer.summarize_file(file_path, &content).await?;

        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(FileSummary {
            file_path: file_path.display().to_string(),
            file_name,
            summary,
            file_size: metadata.len(),
            processed_at: Local::now().to_rfc3339(),
        })
    }
}
