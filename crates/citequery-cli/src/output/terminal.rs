//! Terminal output formatter

use super::FormatOptions;
use citequery_core::{Outcome, SourceChunk, NO_RESULTS_MESSAGE};

pub fn format_outcome(outcome: &Outcome, options: &FormatOptions) -> String {
    let answered = match outcome {
        Outcome::NoResults => return format!("{}\n", NO_RESULTS_MESSAGE),
        Outcome::Answered(answered) => answered,
    };

    let mut output = String::new();
    output.push_str(answered.answer.trim_end());
    output.push_str("\n\n");

    for source in answered.sources.iter().take(options.max_sources) {
        output.push_str(&format_source(source));
    }

    let hidden = answered.sources.len().saturating_sub(options.max_sources);
    if hidden > 0 {
        output.push_str(&format!("...and {} more chunks.\n", hidden));
    }

    output
}

/// Source-map entry: header line plus indented snippet
pub fn format_source(source: &SourceChunk) -> String {
    format!(
        "[Source {}] file={} page={} score={:.3}\n  └─ {}\n",
        source.label, source.file_path, source.page, source.score, source.snippet
    )
}
