//! Question answering pipeline
//!
//! load -> index -> retrieve -> label -> synthesize, each step awaited before
//! the next. Nothing is cached or retried.

use crate::citation::{check_citations, label_sources, CitationReport, SourceChunk};
use crate::config::QueryOptions;
use crate::error::{CiteError, Result};
use crate::index::build_index;
use crate::llm::{Embedder, Synthesizer};
use crate::providers::DocumentLoader;
use serde::Serialize;
use std::path::PathBuf;

/// Advisory printed when retrieval finds nothing
pub const NO_RESULTS_MESSAGE: &str =
    "No results retrieved. Try increasing --top-k or check your PDFs.";

/// One question over a set of PDFs
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub pdfs: Vec<PathBuf>,
    pub query: String,
    pub options: QueryOptions,
}

/// Pipeline stage, reported before the stage starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Loading { files: usize },
    Indexing { pages: usize },
    Retrieving,
    Synthesizing { sources: usize },
}

/// Answer with the sources it was synthesized from
#[derive(Debug, Clone, Serialize)]
pub struct AnsweredQuery {
    pub query: String,
    pub answer: String,
    pub sources: Vec<SourceChunk>,
    pub citations: CitationReport,
}

/// Result of a run
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Retrieval returned nothing; no synthesis was attempted
    NoResults,
    Answered(AnsweredQuery),
}

/// Answer `request.query` over `request.pdfs` with inline `[Source N]` citations
pub async fn answer_with_citations(
    request: &QueryRequest,
    loader: &dyn DocumentLoader,
    embedder: &dyn Embedder,
    synthesizer: &dyn Synthesizer,
    progress: Option<Box<dyn Fn(Stage) + Send + Sync>>,
) -> Result<Outcome> {
    request.options.validate()?;
    let report = |stage: Stage| {
        if let Some(ref callback) = progress {
            callback(stage);
        }
    };

    report(Stage::Loading {
        files: request.pdfs.len(),
    });
    let pages = loader.load(&request.pdfs).await?;
    if pages.is_empty() {
        return Err(CiteError::Parse(
            "No documents loaded from the provided PDFs.".to_string(),
        ));
    }

    report(Stage::Indexing { pages: pages.len() });
    let index = build_index(&pages, embedder).await?;

    report(Stage::Retrieving);
    let retrieved = if index.is_empty() {
        Vec::new()
    } else {
        let query_embedding = embedder.embed(&request.query).await?;
        index.retrieve(&query_embedding, request.options.top_k)
    };
    tracing::debug!("Retrieved {} of {} nodes", retrieved.len(), index.len());

    let sources = label_sources(
        &retrieved,
        request.options.chunk_size,
        request.options.chunk_overlap,
    );
    if sources.is_empty() {
        return Ok(Outcome::NoResults);
    }

    report(Stage::Synthesizing {
        sources: sources.len(),
    });
    let answer = synthesizer.synthesize(&request.query, &sources).await?;

    let citations = check_citations(&answer, sources.len());
    for label in &citations.out_of_range {
        tracing::warn!(
            "Answer cites [Source {}] but only {} sources exist",
            label,
            sources.len()
        );
    }
    if citations.cited.is_empty() {
        tracing::warn!("Answer contains no [Source N] citations");
    }

    Ok(Outcome::Answered(AnsweredQuery {
        query: request.query.clone(),
        answer,
        sources,
        citations,
    }))
}
