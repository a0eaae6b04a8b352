//! Index construction: split pages into nodes and embed them

use super::chunker::{
    chunk_by_chars, tokens_to_chars, INDEX_CHUNK_OVERLAP_TOKENS, INDEX_CHUNK_SIZE_TOKENS,
};
use super::vector::{IndexNode, VectorIndex};
use crate::error::{CiteError, Result};
use crate::llm::Embedder;
use crate::providers::PageText;

const BATCH_SIZE: usize = 32;

/// Node text awaiting its embedding
struct PendingNode<'a> {
    page: &'a PageText,
    text: String,
}

/// Split every page into index nodes and embed them in batches
pub async fn build_index(pages: &[PageText], embedder: &dyn Embedder) -> Result<VectorIndex> {
    let size = tokens_to_chars(INDEX_CHUNK_SIZE_TOKENS);
    let overlap = tokens_to_chars(INDEX_CHUNK_OVERLAP_TOKENS);

    let pending: Vec<PendingNode> = pages
        .iter()
        .flat_map(|page| {
            chunk_by_chars(&page.text, size, overlap)
                .into_iter()
                .map(|c| c.text.trim().to_string())
                .filter(|t| !t.is_empty())
                .map(move |text| PendingNode { page, text })
        })
        .collect();

    tracing::info!(
        "Embedding {} nodes from {} pages with {}",
        pending.len(),
        pages.len(),
        embedder.model_name()
    );

    let mut index = VectorIndex::new();
    for (batch_idx, batch) in pending.chunks(BATCH_SIZE).enumerate() {
        let texts: Vec<String> = batch.iter().map(|n| n.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        if embeddings.len() != batch.len() {
            return Err(CiteError::Llm(format!(
                "Embedder returned {} vectors for {} texts",
                embeddings.len(),
                batch.len()
            )));
        }

        for (node, embedding) in batch.iter().zip(embeddings) {
            index.insert(IndexNode {
                file_path: node.page.file_path.clone(),
                page: node.page.page,
                text: node.text.clone(),
                embedding,
            });
        }
        tracing::debug!("Embedded batch {}", batch_idx + 1);
    }

    Ok(index)
}
