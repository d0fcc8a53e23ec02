use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_TOKENS: u32 = 150;
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Optional per-directory configuration file. Every key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl FileConfig {
    const CONFIG_FILE: &'static str = ".dirsum.yml";

    /// Load `.dirsum.yml` from the given directory, falling back to an
    /// empty config when the file does not exist.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(Self::CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: FileConfig = serde_yaml::from_str(&contents)
                .map_err(|e| Error::Config(format!("{}: {e}", config_path.display())))?;
            Ok(config)
        } else {
            Ok(FileConfig::default())
        }
    }
}

/// Parameters for every summarization call. Constructed once at startup.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl SummarizerConfig {
    /// Resolve each parameter as CLI flag > environment variable > config
    /// file > built-in default.
    pub fn resolve(api_key: String, cli_model: Option<String>, file: &FileConfig) -> Self {
        let model = cli_model
            .or_else(|| std::env::var("DIRSUM_MODEL").ok())
            .or_else(|| file.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_tokens = std::env::var("DIRSUM_MAX_TOKENS")
            .ok()
            .and_then(|t| t.parse().ok())
            .or(file.max_tokens)
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let temperature = std::env::var("DIRSUM_TEMPERATURE")
            .ok()
            .and_then(|t| t.parse().ok())
            .or(file.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE);

        Self {
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }
}
