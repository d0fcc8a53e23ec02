use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

use crate::domain::{ProcessingRequest, SummaryReport};
use crate::infra::config::{FileConfig, SummarizerConfig};
use crate::infra::logging;
use crate::llm::FileSummarizer;
use crate::processor::FileProcessor;

#[derive(Parser)]
#[command(name = "dirsum")]
#[command(about = "Summarize text files in a directory using OpenAI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to process
    #[arg(short, long)]
    pub directory: PathBuf,

    /// Output JSON file path (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// OpenAI API key (or set OPENAI_API_KEY)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// OpenAI model to use
    #[arg(short, long)]
    pub model: Option<String>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli.log_level)?;

    match execute(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(error = %e, "application error");
            Err(e)
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .context(
            "OpenAI API key is required. Use --api-key or set the OPENAI_API_KEY \
             environment variable",
        )?;

    let file_config = FileConfig::load_from(std::env::current_dir()?)?;
    let config = SummarizerConfig::resolve(api_key, cli.model, &file_config);

    info!(model = %config.model, "initializing summarizer");
    let summarizer = FileSummarizer::new(&config);

    let request = ProcessingRequest {
        directory: cli.directory,
        output: cli.output,
        log_level: cli.log_level,
    };

    let report = run_pipeline(summarizer, &request).await?;
    let output_json = serde_json::to_string_pretty(&report)?;

    match &request.output {
        Some(path) => {
            std::fs::write(path, &output_json)?;
            info!(output = %path.display(), "results written");
            println!("{} Report written to {}", "✓".green(), path.display());
        }
        None => println!("{output_json}"),
    }

    info!(
        processed = report.processed_files,
        elapsed_ms = report.processing_time,
        "processing completed"
    );

    Ok(())
}

/// Probe the API, then process the directory and aggregate the report.
/// The probe must pass before any directory listing happens.
async fn run_pipeline(
    summarizer: FileSummarizer,
    request: &ProcessingRequest,
) -> Result<SummaryReport> {
    if !summarizer.test_connection().await {
        anyhow::bail!("failed to connect to the OpenAI API");
    }

    let processor = FileProcessor::new(summarizer);
    let started = Instant::now();
    let summaries = processor.process_directory(request).await?;
    Ok(SummaryReport::new(summaries, started.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::llm::CompletionBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct DeadBackend {
        completions: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompletionBackend for DeadBackend {
        async fn complete(&self, _prompt: &str) -> crate::error::Result<String> {
            self.completions.fetch_add(1, Ordering::SeqCst);
            Ok("unreachable".to_string())
        }

        async fn list_models(&self) -> crate::error::Result<Vec<String>> {
            Err(Error::Api("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn failed_probe_aborts_before_any_listing() {
        let completions = Arc::new(AtomicUsize::new(0));
        let summarizer = FileSummarizer::with_backend(Box::new(DeadBackend {
            completions: Arc::clone(&completions),
        }));

        // A nonexistent directory would fail the listing step; a probe
        // failure must win because it runs first.
        let request = ProcessingRequest {
            directory: PathBuf::from("/definitely/not/here"),
            output: None,
            log_level: "info".to_string(),
        };

        let result = run_pipeline(summarizer, &request).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to connect"));
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "dirsum",
            "-d",
            "/tmp/project",
            "-o",
            "report.json",
            "-k",
            "sk-test",
            "-l",
            "debug",
            "-m",
            "gpt-4o-mini",
        ]);

        assert_eq!(cli.directory, PathBuf::from("/tmp/project"));
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.model.as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn directory_is_required_and_log_level_defaults() {
        assert!(Cli::try_parse_from(["dirsum"]).is_err());

        let cli = Cli::parse_from(["dirsum", "--directory", "src"]);
        assert_eq!(cli.log_level, "info");
        assert!(cli.output.is_none());
        assert!(cli.model.is_none());
    }
}
