//! Splitting formatted text into display-sized chunks along sentence
//! boundaries.

use super::FormatOptions;
use super::predicates::split_sentences;

/// Split text into chunks of at most `max_chunk_length` characters, greedily
/// packing whole sentences. A single sentence longer than the limit is never
/// split further; it becomes its own oversized chunk. The result is never
/// empty.
pub(crate) fn chunk(text: &str, opts: &FormatOptions) -> Vec<String> {
    let max = opts.max_chunk_length;
    if text.chars().count() <= max {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();
        // the +1 accounts for the joining space, keeping the bound strict
        if current_len > 0 && current_len + 1 + sentence_len > max {
            chunks.push(current.trim().to_string());
            current = sentence.to_string();
            current_len = sentence_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(sentence);
            current_len += sentence_len;
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        chunks.push(tail.to_string());
    }

    if chunks.is_empty() {
        vec![text.to_string()]
    } else {
        chunks
    }
}
