//! Output formatters

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use citequery_core::{Outcome, Result};

/// Format options
pub struct FormatOptions {
    /// Source-map entries printed before the remainder is summarised
    pub max_sources: usize,
}

/// Format a pipeline outcome
pub fn format_outcome(
    outcome: &Outcome,
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_outcome(outcome),
        OutputFormat::Md => Ok(markdown::format_outcome(outcome, options)),
        OutputFormat::Cli => Ok(terminal::format_outcome(outcome, options)),
    }
}
