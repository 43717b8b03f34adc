//! Emphasis markers for recognized terms: brand names, key words, places,
//! amounts with a currency unit, and times.

use std::sync::OnceLock;

use regex::Regex;

use super::FormatOptions;

fn brand_terms() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(Chriki|Chériki-1)\b").expect("valid pattern"))
}

fn emphasis_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(important|mhim)\b").expect("valid pattern"))
}

fn place_names() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(Oran|Alger|Algiers|Constantine|Sétif|Annaba)\b").expect("valid pattern")
    })
}

fn amounts() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(DA|dinars?|euros?)\b").expect("valid pattern"))
}

fn times() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2}:\d{2})\b").expect("valid pattern"))
}

/// Wrap recognized terms in `**bold**` / `*italic*` markers. No-op when
/// `enable_markdown` is off. Terms that already carry the marker are left
/// alone (best effort, checked on the immediate neighbors).
pub(crate) fn annotate(text: &str, opts: &FormatOptions) -> String {
    if !opts.enable_markdown {
        return text.to_string();
    }
    let step = wrap_matches(text, brand_terms(), "**");
    let step = wrap_matches(&step, emphasis_words(), "**");
    let step = wrap_matches(&step, place_names(), "*");
    let step = wrap_amounts(&step);
    wrap_matches(&step, times(), "**")
}

/// True when the span at `[start, end)` is directly preceded and followed by
/// `marker`.
fn already_wrapped(text: &str, start: usize, end: usize, marker: &str) -> bool {
    text[..start].ends_with(marker) && text[end..].starts_with(marker)
}

/// Wrap every match of `re` in `marker` pairs, skipping already-wrapped spans.
fn wrap_matches(text: &str, re: &Regex, marker: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if already_wrapped(text, m.start(), m.end(), marker) {
            out.push_str(m.as_str());
        } else {
            out.push_str(marker);
            out.push_str(m.as_str());
            out.push_str(marker);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Bold number-plus-currency spans, normalizing the gap between number and
/// unit to a single space.
fn wrap_amounts(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for caps in amounts().captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&text[last..m.start()]);
        if already_wrapped(text, m.start(), m.end(), "**") {
            out.push_str(m.as_str());
        } else {
            out.push_str("**");
            out.push_str(&caps[1]);
            out.push(' ');
            out.push_str(&caps[2]);
            out.push_str("**");
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
