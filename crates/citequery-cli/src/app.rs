//! CLI argument definitions

use citequery_core::config::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_TOP_K,
};
use citequery_core::{QueryOptions, ServiceOverrides};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Source-map lines printed before the remainder is summarised
pub const DEFAULT_MAX_SOURCES: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "citequery")]
#[command(
    author,
    version,
    about = "Answer questions over local PDFs with inline [Source N] citations"
)]
pub struct Cli {
    /// Path(s) to one or more PDF files
    #[arg(long, num_args = 1.., required = true, value_name = "PATH")]
    pub pdf: Vec<PathBuf>,

    /// Your natural-language question
    #[arg(long)]
    pub query: String,

    /// Number of index nodes to retrieve
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Citation chunk size in tokens
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Citation chunk overlap in tokens
    #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
    pub chunk_overlap: usize,

    /// Chat model for synthesis [default: gpt-5-nano]
    #[arg(long)]
    pub model: Option<String>,

    /// Embedding model [default: text-embedding-3-small]
    #[arg(long)]
    pub embed_model: Option<String>,

    /// Base URL of an OpenAI-compatible service [default: https://api.openai.com]
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// HTTP request timeout in seconds [default: 60]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Source-map entries to print before summarising the rest
    #[arg(long, default_value_t = DEFAULT_MAX_SOURCES)]
    pub max_sources: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            top_k: self.top_k,
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }

    pub fn service_overrides(&self) -> ServiceOverrides {
        ServiceOverrides {
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            embed_model: self.embed_model.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Md,
}
