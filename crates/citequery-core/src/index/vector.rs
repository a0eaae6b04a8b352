//! In-memory vector index
//!
//! Nodes live for the duration of one run; similarity is cosine, computed in
//! Rust over every node.

use serde::Serialize;

/// Indexed text unit with its embedding
#[derive(Debug, Clone)]
pub struct IndexNode {
    pub file_path: String,
    pub page: usize,
    pub text: String,
    pub embedding: Vec<f32>,
}

/// Node returned by retrieval, with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedNode {
    pub file_path: String,
    pub page: usize,
    pub text: String,
    pub score: f32,
}

/// Flat vector index with exhaustive search
#[derive(Debug, Default)]
pub struct VectorIndex {
    nodes: Vec<IndexNode>,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: IndexNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the `top_k` nodes most similar to `query_embedding`, best first.
    /// Equal scores keep insertion order.
    pub fn retrieve(&self, query_embedding: &[f32], top_k: usize) -> Vec<RetrievedNode> {
        if top_k == 0 || self.nodes.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (i, cosine_similarity(query_embedding, &node.embedding)))
            .collect();

        // sort_by is stable, so ties stay in insertion order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(top_k)
            .map(|(i, score)| {
                let node = &self.nodes[i];
                RetrievedNode {
                    file_path: node.file_path.clone(),
                    page: node.page,
                    text: node.text.clone(),
                    score,
                }
            })
            .collect()
    }
}

/// Cosine similarity; 0.0 for mismatched, empty or zero vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
