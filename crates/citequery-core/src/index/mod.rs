//! Indexing pipeline
//!
//! Chunking, embedding and in-memory vector retrieval.

mod chunker;
mod embedder;
mod vector;

pub use chunker::*;
pub use embedder::*;
pub use vector::*;
