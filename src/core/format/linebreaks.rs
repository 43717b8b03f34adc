//! Paragraph-break insertion for readability: after long sentences, before
//! enumerations, and before coordinating conjunctions.

use std::sync::OnceLock;

use regex::Regex;

use super::FormatOptions;
use super::predicates::{is_arabic_base_letter, is_latin_letter, is_sentence_terminator};

/// Sentences longer than this get a paragraph break after their terminator.
const LONG_SENTENCE: usize = 60;

fn enum_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?])\s+(1\.|•|-|\*)").expect("valid pattern"))
}

fn conjunction_break() -> &'static Regex {
    // Deliberately no trailing word boundary: matches prefixes of longer
    // words, same as the historical behavior callers rely on.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([.!?])\s+(Et|And|Walakin|Mais|But)").expect("valid pattern")
    })
}

/// Insert paragraph breaks. No-op when `add_line_breaks` is off. Three
/// sequential passes: long-sentence boundaries, enumeration markers,
/// conjunctions. A position touched by one pass may be reshaped by a later
/// one.
pub(crate) fn break_lines(text: &str, opts: &FormatOptions) -> String {
    if !opts.add_line_breaks {
        return text.to_string();
    }
    let step = break_after_long_sentences(text);
    let step = enum_break().replace_all(&step, "$1\n\n$2").into_owned();
    conjunction_break()
        .replace_all(&step, "$1\n\n$2")
        .into_owned()
}

/// Replace the separator after a long sentence with a paragraph break.
/// A boundary is a terminator followed by whitespace and a letter; the
/// preceding sentence is measured from the previous terminator (exclusive)
/// to the current one.
fn break_after_long_sentences(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev_term: Option<usize> = None;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_sentence_terminator(c) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let has_separator = j > i + 1;
            let next_is_letter =
                j < chars.len() && (is_latin_letter(chars[j]) || is_arabic_base_letter(chars[j]));
            if has_separator && next_is_letter {
                let sentence_len = i - prev_term.map_or(0, |p| p + 1);
                out.push(c);
                if sentence_len > LONG_SENTENCE {
                    out.push_str("\n\n");
                } else {
                    out.extend(chars[i + 1..j].iter());
                }
                prev_term = Some(i);
                i = j;
                continue;
            }
            prev_term = Some(i);
        }
        out.push(c);
        i += 1;
    }
    out
}
