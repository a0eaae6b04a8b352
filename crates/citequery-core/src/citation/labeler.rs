//! Split retrieved nodes into labelled sources

use super::{make_snippet, SourceChunk, SNIPPET_MAX_CHARS};
use crate::index::{chunk_by_chars, tokens_to_chars, RetrievedNode};

/// Split `nodes` into citation chunks and label them `1..=n`.
///
/// Labels follow the order of `nodes`, which is retrieval rank; scores are
/// never used to reorder.
pub fn label_sources(
    nodes: &[RetrievedNode],
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<SourceChunk> {
    let size_chars = tokens_to_chars(chunk_size);
    let overlap_chars = tokens_to_chars(chunk_overlap);

    let mut sources = Vec::new();
    for node in nodes {
        for piece in chunk_by_chars(&node.text, size_chars, overlap_chars) {
            let text = piece.text.trim();
            if text.is_empty() {
                continue;
            }
            sources.push(SourceChunk {
                label: sources.len() + 1,
                file_path: node.file_path.clone(),
                page: node.page,
                score: node.score,
                text: text.to_string(),
                snippet: make_snippet(text, SNIPPET_MAX_CHARS),
            });
        }
    }

    tracing::debug!(
        "Labelled {} sources from {} retrieved nodes",
        sources.len(),
        nodes.len()
    );
    sources
}

/// Render one source the way it appears in the prompt
pub fn render_source(source: &SourceChunk) -> String {
    format!("Source {}: {}", source.label, source.text)
}

/// Render sources as a context block, one per paragraph
pub fn render_context(sources: &[SourceChunk]) -> String {
    sources
        .iter()
        .map(render_source)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(file: &str, page: usize, score: f32, text: &str) -> RetrievedNode {
        RetrievedNode {
            file_path: file.to_string(),
            page,
            score,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_labels_are_contiguous_from_one() {
        let long = "Sentence number one. ".repeat(40);
        let nodes = vec![
            node("a.pdf", 1, 0.9, &long),
            node("b.pdf", 3, 0.8, "Short text."),
        ];

        let sources = label_sources(&nodes, 20, 2);
        assert!(sources.len() > 2);
        for (i, source) in sources.iter().enumerate() {
            assert_eq!(source.label, i + 1);
        }
        let last = sources.last().unwrap();
        assert_eq!(last.file_path, "b.pdf");
        assert_eq!(last.page, 3);
        assert_eq!(last.text, "Short text.");
    }

    #[test]
    fn test_retrieval_order_is_kept() {
        // Lower score first: labels must not be re-sorted by score
        let nodes = vec![
            node("low.pdf", 1, 0.1, "first retrieved"),
            node("high.pdf", 2, 0.9, "second retrieved"),
        ];
        let sources = label_sources(&nodes, 512, 20);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].file_path, "low.pdf");
        assert_eq!(sources[0].label, 1);
        assert_eq!(sources[1].file_path, "high.pdf");
        assert_eq!(sources[1].label, 2);
    }

    #[test]
    fn test_chunks_inherit_node_origin() {
        let text = "alpha beta gamma delta. ".repeat(30);
        let nodes = vec![node("doc.pdf", 7, 0.42, &text)];
        let sources = label_sources(&nodes, 16, 4);
        assert!(sources.len() > 1);
        assert!(sources
            .iter()
            .all(|s| s.file_path == "doc.pdf" && s.page == 7 && s.score == 0.42));
    }

    #[test]
    fn test_blank_nodes_produce_no_sources() {
        let nodes = vec![node("a.pdf", 1, 0.5, "   \n\n  ")];
        assert!(label_sources(&nodes, 512, 20).is_empty());
        assert!(label_sources(&[], 512, 20).is_empty());
    }

    #[test]
    fn test_render_context() {
        let nodes = vec![node("a.pdf", 1, 0.5, "one"), node("a.pdf", 2, 0.4, "two")];
        let sources = label_sources(&nodes, 512, 20);
        assert_eq!(render_context(&sources), "Source 1: one\n\nSource 2: two");
    }
}
