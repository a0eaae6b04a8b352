//! Citequery Core Library
//!
//! Question answering over local PDF files with inline source citations.
//!
//! # Features
//! - Page-tagged PDF text extraction
//! - In-memory vector index with cosine retrieval
//! - Embeddings and chat synthesis via OpenAI-compatible HTTP services
//! - Sequential `[Source N]` labelling with a verifiable source map

pub mod citation;
pub mod config;
pub mod error;
pub mod index;
pub mod llm;
pub mod pipeline;
pub mod providers;

pub use citation::{check_citations, label_sources, CitationReport, SourceChunk};
pub use config::{Config, LLMServiceConfig, QueryOptions, ServiceOverrides};
pub use error::{CiteError, Error, Result};
pub use index::{RetrievedNode, VectorIndex};
pub use llm::{
    ChatMessage, Embedder, HttpEmbedder, HttpSynthesizer, LLMClient, OpenAIClient, Synthesizer,
};
pub use pipeline::{
    answer_with_citations, AnsweredQuery, Outcome, QueryRequest, Stage, NO_RESULTS_MESSAGE,
};
pub use providers::{DocumentLoader, PDFProvider, PageText};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "citequery";
