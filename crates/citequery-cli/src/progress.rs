//! Stage progress on stderr

use citequery_core::Stage;
use std::io::{self, Write};

/// Human-readable line for a pipeline stage
pub fn stage_message(stage: &Stage) -> String {
    match stage {
        Stage::Loading { files } => format!("Loading {} PDF file(s)...", files),
        Stage::Indexing { pages } => format!("Building index over {} page(s)...", pages),
        Stage::Retrieving => "Retrieving sources...".to_string(),
        Stage::Synthesizing { sources } => {
            format!("Generating answer from {} source(s)...", sources)
        }
    }
}

/// Callback printing each stage to stderr, keeping stdout for the answer
pub fn stderr_reporter() -> Box<dyn Fn(Stage) + Send + Sync> {
    Box::new(|stage: Stage| {
        eprintln!("{}", stage_message(&stage));
        io::stderr().flush().ok();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages() {
        assert_eq!(
            stage_message(&Stage::Loading { files: 2 }),
            "Loading 2 PDF file(s)..."
        );
        assert_eq!(
            stage_message(&Stage::Synthesizing { sources: 7 }),
            "Generating answer from 7 source(s)..."
        );
    }
}
