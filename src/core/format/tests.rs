use super::{
    FormatOptions, annotate, annotate_emojis, break_lines, chunk, clean, format_chat_response,
};

fn defaults() -> FormatOptions {
    FormatOptions::default()
}

// --- clean ---

#[test]
fn clean_collapses_whitespace_runs() {
    let out = clean("Salam   khoya \t kifach\n\nrak", &defaults());
    assert_eq!(out, "Salam khoya kifach rak");
}

#[test]
fn clean_squeezes_repeated_punctuation() {
    assert_eq!(clean("Wesh......", &defaults()), "Wesh...");
    assert_eq!(clean("Bezzaf!!!", &defaults()), "Bezzaf!");
    assert_eq!(clean("Sa7???", &defaults()), "Sa7?");
    // two periods are left alone; only runs of three or more squeeze
    assert_eq!(clean("a..b", &defaults()), "a..b");
}

#[test]
fn clean_spaces_latin_arabic_boundaries() {
    assert_eq!(clean("bonjourسلام", &defaults()), "bonjour سلام");
    assert_eq!(clean("سلامbonjour", &defaults()), "سلام bonjour");
}

#[test]
fn clean_trims_edges() {
    assert_eq!(clean("  wesh rak  ", &defaults()), "wesh rak");
}

#[test]
fn clean_is_idempotent() {
    let inputs = [
        "Salam   khoya!!  kifach......rak",
        "bonjourسلام w merci",
        "  plain text  ",
        "",
        "a.. b!! c?? d...e",
    ];
    for input in inputs {
        let once = clean(input, &defaults());
        let twice = clean(&once, &defaults());
        assert_eq!(once, twice, "not idempotent for {:?}", input);
    }
}

#[test]
fn clean_disabled_is_passthrough() {
    let opts = FormatOptions {
        clean_symbols: false,
        ..defaults()
    };
    assert_eq!(clean("a    b!!!", &opts), "a    b!!!");
}

// --- break_lines ---

#[test]
fn long_sentence_gets_paragraph_break() {
    let first = format!("{}.", "a".repeat(79));
    let text = format!("{} Bb. Cc.", first);
    let out = break_lines(&text, &defaults());
    assert_eq!(out, format!("{}\n\nBb. Cc.", first));
}

#[test]
fn short_sentences_keep_single_space() {
    let out = break_lines("Wesh rak. Labas?", &defaults());
    assert_eq!(out, "Wesh rak. Labas?");
}

#[test]
fn enumeration_after_terminator_breaks() {
    let out = break_lines("Hak el khotwat. 1. Rouh l'baladiya", &defaults());
    assert_eq!(out, "Hak el khotwat.\n\n1. Rouh l'baladiya");
    let out = break_lines("Zid haja. - wraq", &defaults());
    assert_eq!(out, "Zid haja.\n\n- wraq");
}

#[test]
fn conjunction_after_terminator_breaks() {
    let out = break_lines("Rani hna. Walakin maandi walou.", &defaults());
    assert_eq!(out, "Rani hna.\n\nWalakin maandi walou.");
    // case-insensitive
    let out = break_lines("Sa7a. mais chwiya.", &defaults());
    assert_eq!(out, "Sa7a.\n\nmais chwiya.");
}

#[test]
fn conjunction_break_matches_word_prefixes() {
    // historical behavior: no trailing word boundary on the conjunction
    let out = break_lines("Ok. Butter is good.", &defaults());
    assert_eq!(out, "Ok.\n\nButter is good.");
}

#[test]
fn break_lines_disabled_is_passthrough() {
    let opts = FormatOptions {
        add_line_breaks: false,
        ..defaults()
    };
    let first = format!("{}.", "a".repeat(79));
    let text = format!("{} Bb.", first);
    assert_eq!(break_lines(&text, &opts), text);
}

// --- annotate (markdown) ---

#[test]
fn amount_with_currency_is_bolded() {
    let out = annotate("Bonjour. Le prix est 500 DA.", &defaults());
    assert_eq!(out, "Bonjour. Le prix est **500 DA**.");
}

#[test]
fn amount_gap_is_normalized() {
    assert_eq!(
        annotate("3adel 1500   dinars kamla", &defaults()),
        "3adel **1500 dinars** kamla"
    );
    assert_eq!(
        annotate("chrit b 20euros", &defaults()),
        "chrit b **20 euros**"
    );
}

#[test]
fn brand_terms_are_bolded() {
    let out = annotate("Ana Chériki-1, sa7bek Chriki.", &defaults());
    assert_eq!(out, "Ana **Chériki-1**, sa7bek **Chriki**.");
}

#[test]
fn emphasis_words_are_bolded_case_insensitive() {
    assert_eq!(
        annotate("Hada IMPORTANT bezzaf.", &defaults()),
        "Hada **IMPORTANT** bezzaf."
    );
    assert_eq!(annotate("haja mhim", &defaults()), "haja **mhim**");
}

#[test]
fn place_names_are_italicized() {
    let out = annotate("Men Oran l'Constantine.", &defaults());
    assert_eq!(out, "Men *Oran* l'*Constantine*.");
}

#[test]
fn times_are_bolded() {
    let out = annotate("El bus yji 14:30 kol nhar.", &defaults());
    assert_eq!(out, "El bus yji **14:30** kol nhar.");
}

#[test]
fn already_wrapped_terms_are_not_doubled() {
    assert_eq!(
        annotate("Rouh l'*Oran* ghodwa.", &defaults()),
        "Rouh l'*Oran* ghodwa."
    );
    assert_eq!(
        annotate("El wa9t **14:30** safi.", &defaults()),
        "El wa9t **14:30** safi."
    );
}

#[test]
fn annotate_disabled_is_passthrough() {
    let opts = FormatOptions {
        enable_markdown: false,
        ..defaults()
    };
    assert_eq!(annotate("500 DA fi Oran", &opts), "500 DA fi Oran");
}

// --- annotate_emojis ---

#[test]
fn greeting_emoji_prefixes_text_start() {
    let out = annotate_emojis("Ahla! Kifach rak?", &defaults());
    assert_eq!(out, "👋 Ahla! Kifach rak?");
}

#[test]
fn emoji_applied_once_and_rerun_adds_nothing() {
    let out = annotate_emojis("La plage hiya zina.", &defaults());
    assert_eq!(out, "🏖️ La plage hiya zina.");
    let again = annotate_emojis(&out, &defaults());
    assert_eq!(again, out);
}

#[test]
fn emoji_skipped_when_glyph_already_present() {
    let text = "🏖️ rayhin l'plage ghodwa.";
    assert_eq!(annotate_emojis(text, &defaults()), text);
}

#[test]
fn one_keyword_prefixes_every_matching_sentence() {
    let out = annotate_emojis("El prix ghali. Prix mte3 batata zad.", &defaults());
    assert_eq!(out, "💰 El prix ghali. 💰 Prix mte3 batata zad.");
}

#[test]
fn second_keyword_with_same_glyph_is_suppressed() {
    // "prix" fires first and contributes 💰; "price" then sees the glyph
    let out = annotate_emojis("Prix wela price?", &defaults());
    assert_eq!(out.matches("💰").count(), 1);
}

#[test]
fn keyword_must_match_whole_word() {
    // "busy" must not trigger the "bus" emoji
    let out = annotate_emojis("Rani busy had nhar.", &defaults());
    assert_eq!(out, "Rani busy had nhar.");
}

#[test]
fn emojis_disabled_is_passthrough() {
    let opts = FormatOptions {
        enable_emojis: false,
        ..defaults()
    };
    assert_eq!(annotate_emojis("Ahla khoya", &opts), "Ahla khoya");
}

// --- chunk ---

fn sentence_of(letter: char, total_len: usize) -> String {
    let mut s: String = std::iter::repeat_n(letter, total_len - 1).collect();
    s.push('.');
    s
}

#[test]
fn short_text_is_single_chunk() {
    let chunks = chunk("Salam. Kifach rak?", &defaults());
    assert_eq!(chunks, ["Salam. Kifach rak?"]);
}

#[test]
fn four_long_sentences_pack_into_two_chunks() {
    let sentences = [
        sentence_of('a', 76),
        sentence_of('b', 76),
        sentence_of('c', 76),
        sentence_of('d', 76),
    ];
    let text = sentences.join(" ");
    let chunks = chunk(&text, &defaults());
    assert_eq!(chunks.len(), 2);
    assert_eq!(
        chunks[0],
        format!("{} {} {}", sentences[0], sentences[1], sentences[2])
    );
    assert_eq!(chunks[1], sentences[3]);
    assert!(chunks[0].chars().count() <= 300);
}

#[test]
fn chunk_length_invariant_holds() {
    let opts = FormatOptions {
        max_chunk_length: 40,
        ..defaults()
    };
    let text = "Wesh rak khoya. Rani mlih el hamdoulilah. Chnouwa el jdid fi dzayer \
                had lyoum. Goulili kolchi. Sa7it.";
    for piece in chunk(text, &opts) {
        assert!(piece.chars().count() <= 40, "chunk too long: {:?}", piece);
    }
}

#[test]
fn oversized_single_sentence_is_never_split() {
    let long = sentence_of('x', 400);
    let chunks = chunk(&long, &defaults());
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].chars().count(), 400);
}

#[test]
fn oversized_sentence_between_short_ones() {
    let opts = FormatOptions {
        max_chunk_length: 100,
        ..defaults()
    };
    let long = sentence_of('x', 150);
    let text = format!("Bdina. {} Salina.", long);
    let chunks = chunk(&text, &opts);
    assert_eq!(chunks, ["Bdina.", long.as_str(), "Salina."]);
}

#[test]
fn chunks_reconstruct_the_text() {
    let opts = FormatOptions {
        max_chunk_length: 30,
        ..defaults()
    };
    let text = "Wesh rak. Rani mlih. El jaw zine lyoum. Nrouho l'plage. Sa7a khoya.";
    let joined = chunk(text, &opts).join(" ");
    let original: Vec<&str> = text.split_whitespace().collect();
    let rebuilt: Vec<&str> = joined.split_whitespace().collect();
    assert_eq!(original, rebuilt);
}

#[test]
fn chunk_never_returns_empty() {
    assert_eq!(chunk("", &defaults()), [""]);
}

// --- format_chat_response ---

#[test]
fn empty_input_yields_single_empty_chunk() {
    let msg = format_chat_response("", &defaults());
    assert_eq!(msg.chunks, [""]);
    assert!(!msg.has_formatting);
}

#[test]
fn plain_text_without_matches_is_unformatted() {
    let msg = format_chat_response("Bonjour", &defaults());
    assert_eq!(msg.chunks, ["Bonjour"]);
    assert!(!msg.has_formatting);
}

#[test]
fn price_reply_gets_bold_amount_and_money_emoji() {
    let msg = format_chat_response("Bonjour. Le prix est 500 DA.", &defaults());
    assert_eq!(msg.chunks, ["Bonjour. 💰 Le prix est **500 DA**."]);
    assert!(msg.has_formatting);
}

#[test]
fn long_reply_is_split_and_marked_formatted() {
    let text = format!(
        "{} {} {}",
        sentence_of('a', 150),
        sentence_of('b', 150),
        sentence_of('c', 150)
    );
    let msg = format_chat_response(&text, &defaults());
    assert!(msg.chunks.len() > 1);
    assert!(msg.has_formatting);
}

#[test]
fn stages_can_all_be_disabled() {
    let opts = FormatOptions {
        enable_markdown: false,
        enable_emojis: false,
        add_line_breaks: false,
        clean_symbols: false,
        ..defaults()
    };
    let msg = format_chat_response("Salam. Le prix est 500 DA.", &opts);
    assert_eq!(msg.chunks, ["Salam. Le prix est 500 DA."]);
    assert!(!msg.has_formatting);
}

#[test]
fn suggestions_ride_along_with_the_formatted_reply() {
    let msg = format_chat_response("Wach t7ebb naarfek 3la blayess fi Oran.", &defaults());
    assert!(!msg.suggestions.is_empty());
    assert!(msg.suggestions.len() <= 3);
}
