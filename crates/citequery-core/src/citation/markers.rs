//! Citation marker scanning
//!
//! Recognises `[Source 3]`, `[Source 1, Source 4]` and `[Source 1, 2]`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

lazy_static! {
    static ref MARKER_RE: Regex =
        Regex::new(r"\[Source\s+(\d+(?:\s*,\s*(?:Source\s+)?\d+)*)\]").expect("valid regex");
    static ref NUMBER_RE: Regex = Regex::new(r"\d+").expect("valid regex");
}

/// Labels referenced by an answer, checked against the source count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CitationReport {
    /// Distinct labels cited, ascending
    pub cited: Vec<usize>,
    /// Cited labels with no matching source
    pub out_of_range: Vec<usize>,
}

impl CitationReport {
    pub fn is_valid(&self) -> bool {
        self.out_of_range.is_empty()
    }
}

/// Distinct labels cited in `answer`, ascending
pub fn cited_labels(answer: &str) -> Vec<usize> {
    let mut labels = BTreeSet::new();
    for caps in MARKER_RE.captures_iter(answer) {
        for num in NUMBER_RE.find_iter(&caps[1]) {
            // Too large for usize: no source can carry it
            labels.insert(num.as_str().parse::<usize>().unwrap_or(usize::MAX));
        }
    }
    labels.into_iter().collect()
}

/// Check every marker in `answer` against labels `1..=source_count`
pub fn check_citations(answer: &str, source_count: usize) -> CitationReport {
    let cited = cited_labels(answer);
    let out_of_range = cited
        .iter()
        .copied()
        .filter(|&label| label == 0 || label > source_count)
        .collect();
    CitationReport {
        cited,
        out_of_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_markers() {
        let answer = "Rust is safe [Source 2]. It is fast [Source 1] [Source 2].";
        assert_eq!(cited_labels(answer), vec![1, 2]);
    }

    #[test]
    fn test_grouped_markers() {
        assert_eq!(cited_labels("Claim [Source 1, Source 3]."), vec![1, 3]);
        assert_eq!(cited_labels("Claim [Source 4, 5]."), vec![4, 5]);
    }

    #[test]
    fn test_ignores_other_brackets() {
        assert!(cited_labels("See [1] and [Sources] and [source 2].").is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let report = check_citations("A [Source 1]. B [Source 4]. C [Source 0].", 3);
        assert_eq!(report.cited, vec![0, 1, 4]);
        assert_eq!(report.out_of_range, vec![0, 4]);
        assert!(!report.is_valid());

        assert!(check_citations("A [Source 3].", 3).is_valid());
        assert!(check_citations("No markers at all.", 0).is_valid());
    }

    #[test]
    fn test_overflowing_label_is_out_of_range() {
        let report = check_citations("A [Source 1]. B [Source 99999999999999999999999].", 3);
        assert_eq!(report.cited, vec![1, usize::MAX]);
        assert_eq!(report.out_of_range, vec![usize::MAX]);
        assert!(!report.is_valid());
    }
}
