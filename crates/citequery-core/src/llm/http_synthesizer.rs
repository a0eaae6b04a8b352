//! Citation answer synthesis over the chat completions endpoint
//!
//! Sources are packed into as few context batches as the character budget
//! allows. The first batch is answered with the QA prompt, every later batch
//! refines the running answer.

use super::prompts::{citation_qa_messages, citation_refine_messages};
use super::{LLMClient, Synthesizer};
use crate::citation::{render_source, SourceChunk};
use crate::config::DEFAULT_MAX_CONTEXT_CHARS;
use crate::error::{CiteError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Synthesizer backed by a chat model
pub struct HttpSynthesizer {
    client: Arc<dyn LLMClient>,
    max_context_chars: usize,
}

impl HttpSynthesizer {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }

    /// Set the character budget for one request's context
    pub fn with_max_context_chars(mut self, max_context_chars: usize) -> Self {
        self.max_context_chars = max_context_chars.max(1);
        self
    }
}

/// Pack rendered sources, in label order, into batches of at most `max_chars`.
/// A source longer than the budget gets a batch of its own.
pub fn pack_context(sources: &[SourceChunk], max_chars: usize) -> Vec<String> {
    const SEPARATOR: &str = "\n\n";

    let mut batches = Vec::new();
    let mut current = String::new();

    for source in sources {
        let rendered = render_source(source);
        let needed = if current.is_empty() {
            rendered.len()
        } else {
            current.len() + SEPARATOR.len() + rendered.len()
        };

        if !current.is_empty() && needed > max_chars {
            batches.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(SEPARATOR);
        }
        current.push_str(&rendered);
    }

    if !current.is_empty() {
        batches.push(current);
    }
    batches
}

#[async_trait]
impl Synthesizer for HttpSynthesizer {
    async fn synthesize(&self, query: &str, sources: &[SourceChunk]) -> Result<String> {
        let batches = pack_context(sources, self.max_context_chars);
        tracing::info!(
            "Synthesizing over {} sources in {} request(s) with {}",
            sources.len(),
            batches.len(),
            self.client.model_name()
        );

        let mut answer: Option<String> = None;
        for context in &batches {
            let messages = match answer.as_deref() {
                None => citation_qa_messages(query, context),
                Some(existing) => citation_refine_messages(query, existing, context),
            };
            let response = self.client.chat_completion(messages).await?;
            answer = Some(response.trim().to_string());
        }

        answer.ok_or_else(|| CiteError::Llm("No sources to synthesize from".to_string()))
    }

    fn model_name(&self) -> &str {
        self.client.model_name()
    }
}
