//! Contextual emoji prefixes for sentences mentioning known topics.

use super::FormatOptions;
use super::predicates::{contains_whole_word, is_sentence_terminator};

/// Keyword → emoji table, applied in definition order. Keywords are
/// lowercase; matching is whole-word and case-insensitive.
pub(crate) const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    // food
    ("restaurants", "🍽️"),
    ("restaurant", "🍽️"),
    ("makla", "🍽️"),
    ("food", "🍽️"),
    // cities
    ("oran", "📍"),
    ("alger", "📍"),
    ("algiers", "📍"),
    ("constantine", "📍"),
    ("setif", "📍"),
    ("annaba", "📍"),
    // weather
    ("météo", "🌤️"),
    ("weather", "🌤️"),
    ("jaw", "🌤️"),
    ("rain", "🌧️"),
    ("sun", "☀️"),
    // beach and sea
    ("beach", "🏖️"),
    ("plage", "🏖️"),
    ("sea", "🌊"),
    ("bahr", "🌊"),
    // transport
    ("transport", "🚌"),
    ("bus", "🚌"),
    ("metro", "🚇"),
    ("taxi", "🚕"),
    // money and shopping
    ("prix", "💰"),
    ("price", "💰"),
    ("shopping", "🛍️"),
    // greetings
    ("salam", "👋"),
    ("ahla", "👋"),
    ("merci", "🙏"),
    ("choukran", "🙏"),
    // time
    ("time", "⏰"),
    ("wa9t", "⏰"),
    ("today", "📅"),
    ("lyoum", "📅"),
];

/// Prefix sentences with topic emojis. No-op when `enable_emojis` is off.
/// A keyword fires only when its glyph is absent from the whole text at that
/// point. The check is text-wide, not per sentence, so a glyph shared by
/// several keywords is contributed by the first of them only.
pub(crate) fn annotate_emojis(text: &str, opts: &FormatOptions) -> String {
    if !opts.enable_emojis {
        return text.to_string();
    }
    let mut processed = text.to_string();
    for (keyword, emoji) in EMOJI_KEYWORDS {
        if contains_whole_word(&processed, keyword) && !processed.contains(emoji) {
            processed = prefix_matching_segments(&processed, keyword, emoji);
        }
    }
    processed
}

/// Prefix `emoji` to the start of every sentence segment containing
/// `keyword`. Segments are the stretches between sentence terminators and the
/// string ends, with leading whitespace left outside the segment.
fn prefix_matching_segments(text: &str, keyword: &str, emoji: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for (start, end) in segment_ranges(text) {
        out.push_str(&text[last..start]);
        if contains_whole_word(&text[start..end], keyword) {
            out.push_str(emoji);
            out.push(' ');
        }
        out.push_str(&text[start..end]);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

/// Byte ranges of sentence segments: first non-whitespace character through
/// the closing terminator (or string end).
fn segment_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    for (i, c) in text.char_indices() {
        end = i + c.len_utf8();
        if is_sentence_terminator(c) {
            if let Some(s) = start.take() {
                ranges.push((s, end));
            }
        } else if start.is_none() && !c.is_whitespace() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        ranges.push((s, end));
    }
    ranges
}
