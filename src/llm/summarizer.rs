use std::path::Path;
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::infra::config::SummarizerConfig;
use crate::llm::{CompletionBackend, OpenAiClient};

/// Turns file content into a natural-language summary via the completion
/// backend.
pub struct FileSummarizer {
    backend: Box<dyn CompletionBackend>,
}

impl FileSummarizer {
    pub fn new(config: &SummarizerConfig) -> Self {
        Self::with_backend(Box::new(OpenAiClient::new(config)))
    }

    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Summarize one file's content. Fails when the backend call errors or
    /// returns nothing; the error names the offending file.
    pub async fn summarize_file(&self, file_path: &Path, content: &str) -> Result<String> {
        debug!(file = %file_path.display(), "summarizing file");

        let prompt = format!(
            "Please provide a concise summary of the following file content. \
             Focus on the main purpose, key functionality, and important details:\n\n\
             File: {}\n\nContent:\n{}",
            file_path.display(),
            content
        );

        let response = self
            .backend
            .complete(&prompt)
            .await
            .map_err(|e| Error::Summarization {
                path: file_path.to_path_buf(),
                message: e.to_string(),
            })?;

        let summary = response.trim();
        if summary.is_empty() {
            return Err(Error::Summarization {
                path: file_path.to_path_buf(),
                message: "no summary generated from the API response".to_string(),
            });
        }

        debug!(file = %file_path.display(), "successfully summarized file");
        Ok(summary.to_string())
    }

    /// Pre-flight probe: list models to confirm the credential and endpoint
    /// work. Failures are reported as `false` rather than propagated.
    pub async fn test_connection(&self) -> bool {
        match self.backend.list_models().await {
            Ok(_) => {
                info!("OpenAI connection test successful");
                true
            }
            Err(e) => {
                error!(error = %e, "OpenAI connection test failed");
                false
            }
        }
    }
}
