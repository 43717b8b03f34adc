//! Shared text predicates: sentence boundaries, script detection, whole-word
//! matching. Every stage of the pipeline goes through these instead of
//! open-coding its own character tests.

/// Sentence-terminating punctuation.
pub(crate) fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Letters treated as Latin script for boundary spacing.
pub(crate) fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Arabic letters in the base block (hamza through yeh). Used for
/// script-adjacency spacing and sentence-boundary letter checks.
pub(crate) fn is_arabic_base_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{064A}')
}

/// True when the text contains any Arabic-script character, including
/// supplements and presentation forms. Drives right-to-left display.
pub(crate) fn has_arabic_text(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{0600}'..='\u{06FF}'
                | '\u{0750}'..='\u{077F}'
                | '\u{08A0}'..='\u{08FF}'
                | '\u{FB50}'..='\u{FDFF}'
                | '\u{FE70}'..='\u{FEFF}')
    })
}

/// Characters that extend a word for whole-word matching.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive whole-word containment: the match must be bounded by
/// non-word characters or the string edges, not a substring of a longer word.
pub(crate) fn contains_whole_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let hay = text.to_lowercase();
    let needle = word.to_lowercase();
    let mut from = 0;
    while let Some(pos) = hay[from..].find(&needle) {
        let abs = from + pos;
        let before_ok = hay[..abs]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let after_ok = hay[abs + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        from = abs + hay[abs..].chars().next().map_or(1, |c| c.len_utf8());
    }
    false
}

/// Split text into sentences at "terminator followed by whitespace"
/// boundaries. Terminators stay with their sentence; the separating
/// whitespace is dropped.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_was_terminator = false;
    let mut in_separator = false;
    for (i, c) in text.char_indices() {
        if in_separator {
            if c.is_whitespace() {
                continue;
            }
            in_separator = false;
            start = i;
            prev_was_terminator = is_sentence_terminator(c);
            continue;
        }
        if prev_was_terminator && c.is_whitespace() {
            out.push(&text[start..i]);
            in_separator = true;
            continue;
        }
        prev_was_terminator = is_sentence_terminator(c);
    }
    if !in_separator && start < text.len() {
        out.push(&text[start..]);
    }
    out
}
