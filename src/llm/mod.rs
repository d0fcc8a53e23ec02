pub mod client;
pub mod summarizer;

use async_trait::async_trait;

use crate::error::Result;

/// The remote text-completion capability. One implementation talks to the
/// OpenAI API; tests substitute their own.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run a single completion round trip for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// List the model identifiers visible to the configured credential.
    async fn list_models(&self) -> Result<Vec<String>>;
}

pub use client::OpenAiClient;
pub use summarizer::FileSummarizer;
