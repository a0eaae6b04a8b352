//! Property tests for citation labelling
//!
//! Labels must be contiguous from 1, follow retrieval order, and every
//! in-range marker must resolve to a source.

use citequery_core::index::RetrievedNode;
use citequery_core::{check_citations, label_sources};
use proptest::prelude::*;

fn node_strategy() -> impl Strategy<Value = RetrievedNode> {
    (
        "[a-z]{1,8}\\.pdf",
        1usize..500,
        0.0f32..1.0,
        prop::collection::vec("[A-Za-z]{1,12}[.,]? ", 1..200),
    )
        .prop_map(|(file_path, page, score, words)| RetrievedNode {
            file_path,
            page,
            score,
            text: words.concat(),
        })
}

proptest! {
    #[test]
    fn labels_are_contiguous_from_one(
        nodes in prop::collection::vec(node_strategy(), 0..6),
        chunk_size in 2usize..64,
        overlap_ratio in 0.0f64..0.9,
    ) {
        let overlap = ((chunk_size as f64) * overlap_ratio) as usize;
        let sources = label_sources(&nodes, chunk_size, overlap);

        for (i, source) in sources.iter().enumerate() {
            prop_assert_eq!(source.label, i + 1);
            prop_assert!(!source.text.is_empty());
        }
    }

    #[test]
    fn sources_follow_retrieval_order(
        nodes in prop::collection::vec(node_strategy(), 1..6),
        chunk_size in 2usize..64,
    ) {
        let sources = label_sources(&nodes, chunk_size, 0);

        // Map every source back to the first node it could have come from,
        // walking forward only
        let mut node_idx = 0;
        for source in &sources {
            while node_idx < nodes.len()
                && !(nodes[node_idx].file_path == source.file_path
                    && nodes[node_idx].page == source.page
                    && nodes[node_idx].text.contains(&source.text))
            {
                node_idx += 1;
            }
            prop_assert!(node_idx < nodes.len(), "source {} out of order", source.label);
        }
    }

    #[test]
    fn in_range_markers_resolve(
        count in 1usize..40,
        cited in prop::collection::vec(1usize..40, 0..10)
    ) {
        let answer: String = cited
            .iter()
            .map(|n| format!("Claim [Source {}]. ", n))
            .collect();
        let report = check_citations(&answer, count);

        for label in &report.cited {
            let in_range = *label >= 1 && *label <= count;
            prop_assert_eq!(in_range, !report.out_of_range.contains(label));
        }
    }
}
