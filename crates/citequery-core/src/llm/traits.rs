//! LLM trait definitions

use crate::citation::SourceChunk;
use crate::error::Result;
use async_trait::async_trait;

/// Embedding generation trait
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate embedding for single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for batch of texts
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// Answer synthesis over labelled sources
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Produce an answer citing `sources` inline as `[Source N]`
    async fn synthesize(&self, query: &str, sources: &[SourceChunk]) -> Result<String>;

    /// Get model name
    fn model_name(&self) -> &str;
}
