//! Character-based chunking for indexing and citation

/// Characters per token used to convert token budgets
pub const CHARS_PER_TOKEN: usize = 4;

/// Index node size and overlap, in tokens
pub const INDEX_CHUNK_SIZE_TOKENS: usize = 1024;
pub const INDEX_CHUNK_OVERLAP_TOKENS: usize = 200;

/// Text chunk with its byte offset in the source
#[derive(Debug, Clone)]
pub struct Chunk {
    pub text: String,
    pub position: usize,
}

pub fn tokens_to_chars(tokens: usize) -> usize {
    tokens.saturating_mul(CHARS_PER_TOKEN)
}

/// Find a valid char boundary at or before the given byte index
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Find a valid char boundary at or after the given byte index
fn ceil_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Split `content` into chunks of at most `chunk_size` bytes, preferring
/// paragraph, sentence, line and word breaks in the last 30% of each window.
/// Consecutive chunks share up to `overlap` bytes.
pub fn chunk_by_chars(content: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    let chunk_size = chunk_size.max(1);

    if content.len() <= chunk_size {
        return vec![Chunk {
            text: content.to_string(),
            position: 0,
        }];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < content.len() {
        let raw_end = (start + chunk_size).min(content.len());
        let mut end = floor_char_boundary(content, raw_end);
        if end <= start {
            // Window narrower than one multi-byte char
            end = ceil_char_boundary(content, start + 1);
        }
        let mut chunk_end = end;

        if end < content.len() {
            let search_start = ceil_char_boundary(content, start + (chunk_size * 70 / 100));

            if search_start < end {
                let search_region = &content[search_start..end];

                if let Some(pos) = search_region.rfind("\n\n") {
                    chunk_end = search_start + pos + 2;
                } else if let Some(pos) = search_region.rfind(". ") {
                    chunk_end = search_start + pos + 2;
                } else if let Some(pos) = search_region.rfind('\n') {
                    chunk_end = search_start + pos + 1;
                } else if let Some(pos) = search_region.rfind(' ') {
                    chunk_end = search_start + pos + 1;
                }
            }
        }

        chunks.push(Chunk {
            text: content[start..chunk_end].to_string(),
            position: start,
        });

        if chunk_end >= content.len() {
            break;
        }

        let next = ceil_char_boundary(content, chunk_end.saturating_sub(overlap));
        // Overlap may not rewind past the current chunk
        start = if next > start { next } else { chunk_end };
    }

    chunks
}
