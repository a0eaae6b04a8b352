//! Configuration management
//!
//! Settings are resolved with the precedence: CLI flag, environment, config
//! file, built-in default.

use crate::error::{CiteError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the provider base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "CITEQUERY_CONFIG";

pub const DEFAULT_API_BASE: &str = "https://api.openai.com";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_EMBED_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_CHUNK_SIZE: usize = 512;
pub const DEFAULT_CHUNK_OVERLAP: usize = 20;
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 12_000;

/// Optional settings read from the YAML config file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Base URL of the OpenAI-compatible service
    #[serde(default)]
    pub api_base: Option<String>,

    /// Chat model used for synthesis
    #[serde(default)]
    pub model: Option<String>,

    /// Embedding model used for indexing and retrieval
    #[serde(default)]
    pub embed_model: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from `CITEQUERY_CONFIG` or the default path.
    /// A missing file yields the empty config.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::load_from(&path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ServiceOverrides {
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub embed_model: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// LLM service configuration for the hosted provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMServiceConfig {
    /// Base URL of the service, without the `/v1` suffix
    pub url: String,

    /// Model name for chat completions
    pub model: String,

    /// Model name for embeddings
    pub embedding_model: String,

    /// Bearer credential
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LLMServiceConfig {
    /// Merge already-read sources
    pub fn from_sources(
        overrides: &ServiceOverrides,
        file: &Config,
        env_base: Option<String>,
        api_key: String,
    ) -> Result<Self> {
        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CiteError::Config("timeout must be at least 1 second".to_string()));
        }

        let url = overrides
            .api_base
            .clone()
            .or(env_base)
            .or_else(|| file.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            model: overrides
                .model
                .clone()
                .or_else(|| file.model.clone())
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            embedding_model: overrides
                .embed_model
                .clone()
                .or_else(|| file.embed_model.clone())
                .unwrap_or_else(|| DEFAULT_EMBED_MODEL.to_string()),
            api_key,
            timeout_secs,
        })
    }
}

/// Base URL override from the environment, if set and non-empty
pub fn base_url_from_env() -> Option<String> {
    std::env::var(BASE_URL_ENV).ok().filter(|s| !s.trim().is_empty())
}

/// Read the provider credential; missing or blank is a configuration error
pub fn api_key_from_env() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(CiteError::Config(format!(
            "{} is not set in the environment.",
            API_KEY_ENV
        ))),
    }
}

/// Retrieval and citation knobs for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Number of index nodes to retrieve
    pub top_k: usize,
    /// Citation chunk size in tokens
    pub chunk_size: usize,
    /// Citation chunk overlap in tokens
    pub chunk_overlap: usize,
    /// Character budget for one synthesis request's context
    pub max_context_chars: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

impl QueryOptions {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(CiteError::InvalidInput(
                "--top-k must be at least 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(CiteError::InvalidInput(
                "--chunk-size must be at least 1".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(CiteError::InvalidInput(format!(
                "--chunk-overlap ({}) must be smaller than --chunk-size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}
