//! JSON output formatter

use citequery_core::{Outcome, Result, NO_RESULTS_MESSAGE};
use serde_json::json;

pub fn format_outcome(outcome: &Outcome) -> Result<String> {
    let rendered = match outcome {
        Outcome::NoResults => serde_json::to_string_pretty(&json!({
            "answer": null,
            "message": NO_RESULTS_MESSAGE,
            "sources": [],
        }))?,
        Outcome::Answered(answered) => serde_json::to_string_pretty(answered)?,
    };
    Ok(format!("{}\n", rendered))
}
