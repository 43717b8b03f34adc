//! Chat-response formatting: cleanup, paragraph breaks, emphasis markers,
//! contextual emojis, and chunking for progressive display.
//!
//! Stages run in a fixed order (clean → line breaks → markdown → emojis →
//! chunking) and every stage is a pure text-to-text transform gated by one
//! [`FormatOptions`] flag. Raw model output goes in, a [`FormattedMessage`]
//! comes out; no stage performs I/O or fails.

mod chunk;
mod clean;
mod emoji;
mod linebreaks;
mod markdown;
pub(crate) mod predicates;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::core::suggestions;

/// Flags controlling the formatting stages. Immutable for the duration of one
/// formatting call; use struct-update syntax for partial overrides:
///
/// ```ignore
/// let opts = FormatOptions { max_chunk_length: 120, ..FormatOptions::default() };
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_markdown: bool,
    pub enable_emojis: bool,
    /// Target maximum characters per chunk (Unicode scalar values).
    pub max_chunk_length: usize,
    pub add_line_breaks: bool,
    pub clean_symbols: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_markdown: true,
            enable_emojis: true,
            max_chunk_length: 300,
            add_line_breaks: true,
            clean_symbols: true,
        }
    }
}

/// A formatted reply ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedMessage {
    /// Display-sized segments in reading order. Never empty.
    pub chunks: Vec<String>,
    /// True when the text was split or changed by any stage.
    pub has_formatting: bool,
    /// Follow-up questions extracted from the raw reply (at most 3).
    pub suggestions: Vec<String>,
}

/// Run the full pipeline over raw model output. Never fails; an empty input
/// yields a single empty chunk with `has_formatting == false`.
pub fn format_chat_response(raw: &str, opts: &FormatOptions) -> FormattedMessage {
    let processed = clean::clean(raw, opts);
    let processed = linebreaks::break_lines(&processed, opts);
    let processed = markdown::annotate(&processed, opts);
    let processed = emoji::annotate_emojis(&processed, opts);
    let chunks = chunk::chunk(&processed, opts);
    let has_formatting = chunks.len() > 1 || processed != raw;
    FormattedMessage {
        chunks,
        has_formatting,
        suggestions: suggestions::extract_suggestions(raw),
    }
}

#[cfg(test)]
pub(crate) use chunk::chunk;
#[cfg(test)]
pub(crate) use clean::clean;
#[cfg(test)]
pub(crate) use emoji::annotate_emojis;
#[cfg(test)]
pub(crate) use linebreaks::break_lines;
#[cfg(test)]
pub(crate) use markdown::annotate;
