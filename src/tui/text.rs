//! Chat text rendering: emphasis markers to styled spans, script direction,
//! line wrapping.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::format::predicates::has_arabic_text;

/// Convert `**bold**` and `*italic*` marker pairs into styled spans.
/// Unpaired markers render literally. Model text only ever becomes span
/// *content*, never markup, so untrusted output cannot inject structure.
pub(crate) fn parse_emphasis(s: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        match rest.find('*') {
            None => {
                spans.push(Span::raw(rest.to_string()));
                break;
            }
            Some(pos) => {
                if pos > 0 {
                    spans.push(Span::raw(rest[..pos].to_string()));
                }
                rest = &rest[pos..];
                if let Some(stripped) = rest.strip_prefix("**") {
                    match stripped.find("**") {
                        Some(end) => {
                            spans.push(Span::styled(
                                stripped[..end].to_string(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ));
                            rest = &stripped[end + 2..];
                        }
                        None => {
                            spans.push(Span::raw("**".to_string()));
                            rest = stripped;
                        }
                    }
                } else {
                    let stripped = &rest[1..];
                    match stripped.find('*') {
                        Some(end) => {
                            spans.push(Span::styled(
                                stripped[..end].to_string(),
                                Style::default().add_modifier(Modifier::ITALIC),
                            ));
                            rest = &stripped[end + 1..];
                        }
                        None => {
                            spans.push(Span::raw("*".to_string()));
                            rest = stripped;
                        }
                    }
                }
            }
        }
    }
    spans
}

/// Right-to-left content is aligned to the right edge.
pub(crate) fn is_rtl(text: &str) -> bool {
    has_arabic_text(text)
}

/// Split a chunk into display lines respecting its newlines, then wrap each
/// to `width` columns. Uses textwrap for correct UTF-8 handling.
pub(crate) fn wrap_chunk(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            for wrapped in textwrap::wrap(line, width) {
                out.push(wrapped.into_owned());
            }
        }
    }
    out
}
