//! LLM integration
//!
//! Provides traits and HTTP implementations for:
//! - Embedding generation via an OpenAI-compatible service
//! - Answer synthesis with inline source citations

mod client;
mod http_embedder;
mod http_synthesizer;
mod prompts;
mod traits;

pub use client::{ChatMessage, LLMClient, OpenAIClient};
pub use http_embedder::HttpEmbedder;
pub use http_synthesizer::{pack_context, HttpSynthesizer};
pub use prompts::{citation_qa_messages, citation_refine_messages};
pub use traits::*;
