//! Snippet extraction for the source map

/// Maximum snippet length in characters
pub const SNIPPET_MAX_CHARS: usize = 240;

/// Single-line preview of `text`, at most `max_chars` characters plus an
/// ellipsis when truncated.
pub fn make_snippet(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let cut = flat
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(flat.len());
    let mut end = cut;

    // Prefer a word boundary in the last fifth of the window
    if let Some(pos) = flat[..cut].rfind(' ') {
        if pos >= cut * 4 / 5 {
            end = pos;
        }
    }

    format!("{}...", flat[..end].trim_end())
}
