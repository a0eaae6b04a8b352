//! HTTP-based embedder using external LLM service

use super::{Embedder, LLMClient};
use crate::error::{CiteError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Embedder that uses the hosted embeddings endpoint
pub struct HttpEmbedder {
    client: Arc<dyn LLMClient>,
}

impl HttpEmbedder {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let results = self.client.embed_batch(&[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| CiteError::Llm("No embedding returned".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.client.embed_batch(texts).await
    }

    fn model_name(&self) -> &str {
        self.client.embedding_model_name()
    }
}
