//! Citation labelling
//!
//! Retrieved nodes are split into numbered sources, rendered into the
//! synthesis context and checked against the markers in the answer.

mod labeler;
mod markers;
mod snippet;

pub use labeler::*;
pub use markers::*;
pub use snippet::*;

use serde::Serialize;

/// A numbered citation unit with a back-reference to its origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceChunk {
    /// 1-based label, rendered as `Source {label}`
    pub label: usize,
    pub file_path: String,
    /// 1-based page number within the PDF
    pub page: usize,
    /// Similarity score of the retrieved node this chunk came from
    pub score: f32,
    pub text: String,
    pub snippet: String,
}
