//! Raw text normalization: whitespace, punctuation runs, script spacing.

use super::FormatOptions;
use super::predicates::{is_arabic_base_letter, is_latin_letter};

/// Clean raw model output. No-op when `clean_symbols` is off.
/// Collapses whitespace runs, squeezes repeated punctuation, and spaces
/// Latin/Arabic script boundaries. Applying it twice equals applying it once.
pub(crate) fn clean(text: &str, opts: &FormatOptions) -> String {
    if !opts.clean_symbols {
        return text.to_string();
    }
    let collapsed = collapse_whitespace(text);
    let squeezed = squeeze_punctuation(&collapsed);
    space_script_boundaries(&squeezed).trim().to_string()
}

/// Collapse every whitespace run to a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
            }
            prev_was_space = true;
        } else {
            out.push(c);
            prev_was_space = false;
        }
    }
    out
}

/// Squeeze redundant punctuation: 3 or more periods become exactly three,
/// repeated `!` or `?` become a single character.
fn squeeze_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        match c {
            '.' if run >= 3 => out.push_str("..."),
            '!' | '?' => out.push(c),
            _ => {
                for _ in 0..run {
                    out.push(c);
                }
            }
        }
        i += run;
    }
    out
}

/// Insert a single space wherever a Latin letter directly touches an
/// Arabic letter, in either direction, so the scripts don't visually merge.
fn space_script_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            let crosses = (is_latin_letter(p) && is_arabic_base_letter(c))
                || (is_arabic_base_letter(p) && is_latin_letter(c));
            if crosses {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
