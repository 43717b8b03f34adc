//! Follow-up suggestion extraction: turns the reply's invitation phrases
//! ("wach t7ebb...", "est-ce que tu veux...") into user-voiced questions,
//! with topic-based fallbacks when the reply contains none.

use std::sync::OnceLock;

use regex::Regex;

const MAX_SUGGESTIONS: usize = 3;

struct InvitationPattern {
    re: Regex,
    prefix: &'static str,
}

fn invitation_patterns() -> &'static [InvitationPattern] {
    static PATTERNS: OnceLock<Vec<InvitationPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?i)wach t7ebb\s+([^.!?]+)", ""),
            (r"(?i)t7ebb\s+([^.!?]+)", ""),
            (r"(?i)kifach\s+([^.!?]+)", "Kifach "),
            (r"(?i)est-ce que tu veux\s+([^.!?]+)", "Est-ce que je peux "),
            (r"(?i)vous voulez\s+([^.!?]+)", "Je veux "),
            (r"(?i)ça t'intéresse\s+([^.!?]+)", ""),
        ]
        .into_iter()
        .map(|(pattern, prefix)| InvitationPattern {
            re: Regex::new(pattern).expect("valid pattern"),
            prefix,
        })
        .collect()
    })
}

/// Extract up to 3 follow-up questions from a raw reply.
pub fn extract_suggestions(text: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    for pattern in invitation_patterns() {
        for caps in pattern.re.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let captured = m.as_str().trim();
            if captured.chars().count() <= 5 {
                continue;
            }
            // keep only the leading clause of the captured phrase
            let clause = captured
                .split([',', ';'])
                .next()
                .unwrap_or(captured)
                .trim_end();
            suggestions.push(format!("{}{}?", pattern.prefix, clause));
        }
    }

    if suggestions.is_empty() {
        suggestions = topic_fallbacks(text);
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Canned suggestions keyed on the reply's topic.
fn topic_fallbacks(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let picks: &[&str] = if lower.contains("restaurant") || lower.contains("makla") {
        &[
            "Fin nlaga restaurants mlah 9rib meni?",
            "Chnouwa makla traditionnel li tensa7 biha?",
            "Kemma prix mte3 makla fi restaurants?",
        ]
    } else if lower.contains("météo") || lower.contains("jaw") {
        &[
            "Chnouwa l'jaw ghoudwa?",
            "Wach bard wela skhoun had nhar?",
            "Nlabas eh fi had l'jaw?",
        ]
    } else if lower.contains("oran") || lower.contains("alger") {
        &[
            "Wach andi blayess zouina fi had l'medina?",
            "Kifach nrouh l'centre ville?",
            "Chnouwa transport li y5dem mlah?",
        ]
    } else if lower.contains("couscous") || lower.contains("chorba") {
        &[
            "3allimni kifach ndir couscous?",
            "Wach andi recettes djazairiya o5ra?",
            "Chnouwa makla mte3 l'3id?",
        ]
    } else if lower.contains("travail") || lower.contains("5edma") {
        &[
            "Kifach nlaga 5edma fi dzayer?",
            "A3tini tips bach nekteb CV?",
            "Kemma salaire fi had l'5edma?",
        ]
    } else if lower.contains("football") || lower.contains("koura") {
        &[
            "Chnouwa a5bar l'équipe nationale?",
            "Wach match importante had semaine?",
            "Chkoun les joueurs li ya3jbouk?",
        ]
    } else if lower.contains("université") || lower.contains("études") {
        &[
            "Wach andi universités mlah fi dzayer?",
            "Kifach nekteb dossier inscription?",
            "Chnouwa spécialités li tansa7 biha?",
        ]
    } else if lower.contains("transport") || lower.contains("metro") {
        &[
            "Kifach ya5dem metro fi alger?",
            "Wach andi bus li yrouh l'centre?",
            "Kemma prix transport?",
        ]
    } else if lower.contains("shopping") || lower.contains("centre commercial") {
        &[
            "Fin nlaga centres commerciaux?",
            "Wach andi marques djazairiya mlah?",
            "Kifach nechri online fi dzayer?",
        ]
    } else {
        &[
            "Goulili akther 3la had l'haja",
            "Chnouwa 7aja o5ra mumkine ta3mil?",
            "Kifach mumkine nesta3lek akther?",
        ]
    };
    picks.iter().map(|s| s.to_string()).collect()
}
