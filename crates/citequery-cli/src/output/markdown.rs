//! Markdown output formatter

use super::FormatOptions;
use citequery_core::{Outcome, NO_RESULTS_MESSAGE};

pub fn format_outcome(outcome: &Outcome, options: &FormatOptions) -> String {
    let answered = match outcome {
        Outcome::NoResults => return format!("{}\n", NO_RESULTS_MESSAGE),
        Outcome::Answered(answered) => answered,
    };

    let mut output = String::new();
    output.push_str(&format!("## Answer\n\n{}\n\n", answered.answer.trim_end()));
    output.push_str("## Sources\n\n");
    output.push_str("| Source | File | Page | Score | Snippet |\n");
    output.push_str("|---|---|---|---|---|\n");

    for source in answered.sources.iter().take(options.max_sources) {
        output.push_str(&format!(
            "| {} | `{}` | {} | {:.3} | {} |\n",
            source.label,
            source.file_path,
            source.page,
            source.score,
            source.snippet.replace('|', "\\|")
        ));
    }

    let hidden = answered.sources.len().saturating_sub(options.max_sources);
    if hidden > 0 {
        output.push_str(&format!("\n...and {} more chunks.\n", hidden));
    }

    output
}
