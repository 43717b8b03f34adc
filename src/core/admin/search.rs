//! Query understanding and relevance scoring over the admin store.

use super::AdminDocument;

/// Administrative action phrases in English, Arabic, and French.
const ACTION_KEYWORDS: &[&str] = &[
    "how to get",
    "how to obtain",
    "how to apply",
    "how to request",
    "كيف أحصل على",
    "كيف أطلب",
    "كيفية الحصول على",
    "طريقة الحصول على",
    "comment obtenir",
    "comment demander",
    "comment faire",
    "procédure pour",
    "apply for",
    "request",
    "obtain",
    "get",
    "need",
    "require",
    "أحتاج",
    "أريد",
    "أطلب",
    "محتاج",
    "j'ai besoin",
    "je veux",
    "je demande",
    "procedure",
    "process",
    "steps",
    "requirements",
    "إجراءات",
    "خطوات",
    "شروط",
    "متطلبات",
    "procédure",
    "étapes",
    "conditions",
    "exigences",
];

/// Document-type keywords in the three languages.
const DOCUMENT_KEYWORDS: &[&str] = &[
    "passport",
    "id card",
    "birth certificate",
    "marriage certificate",
    "جواز سفر",
    "بطاقة هوية",
    "شهادة ميلاد",
    "شهادة زواج",
    "passeport",
    "carte d'identité",
    "acte de naissance",
    "acte de mariage",
    "license",
    "permit",
    "visa",
    "residence",
    "رخصة",
    "تصريح",
    "فيزا",
    "إقامة",
    "licence",
    "permis",
    "résidence",
    "document",
    "certificate",
    "card",
    "paper",
    "وثيقة",
    "شهادة",
    "بطاقة",
    "ورقة",
    "certificat",
    "carte",
    "papier",
];

/// Canonical document names with their cross-language variations.
const DOCUMENT_MAPPINGS: &[(&str, &[&str])] = &[
    ("passport", &["passport", "جواز سفر", "passeport"]),
    (
        "id card",
        &["id card", "identity card", "بطاقة هوية", "carte d'identité"],
    ),
    (
        "birth certificate",
        &["birth certificate", "شهادة ميلاد", "acte de naissance"],
    ),
    (
        "marriage certificate",
        &["marriage certificate", "شهادة زواج", "acte de mariage"],
    ),
    (
        "driving license",
        &["driving license", "driver license", "رخصة قيادة", "permis de conduire"],
    ),
    ("visa", &["visa", "فيزا"]),
    (
        "residence permit",
        &["residence permit", "تصريح إقامة", "permis de séjour"],
    ),
];

/// Filler words ignored when mining residual terms from a query.
const STOPWORDS: &[&str] = &[
    "how", "to", "get", "obtain", "apply", "for", "the", "and", "or", "with",
];

/// True when the query looks like a paperwork question: an action phrase, a
/// document-type keyword, or a keyword of a stored document.
pub fn is_admin_query(query: &str, documents: &[AdminDocument]) -> bool {
    let term = query.to_lowercase();
    let term = term.trim();
    if term.is_empty() {
        return false;
    }

    let has_action = ACTION_KEYWORDS.iter().any(|k| term.contains(k));
    let has_document = DOCUMENT_KEYWORDS.iter().any(|k| term.contains(k));
    let has_stored_keyword = documents.iter().any(|doc| {
        doc.keywords
            .iter()
            .any(|k| term.contains(&k.to_lowercase()))
    });

    has_action || has_document || has_stored_keyword
}

/// Score every document against the query and return the best match, if any
/// scored above zero.
pub fn find_best_match<'a>(
    query: &str,
    documents: &'a [AdminDocument],
) -> Option<&'a AdminDocument> {
    let term = query.to_lowercase();
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let extracted = extract_document_terms(term);

    documents
        .iter()
        .map(|doc| (doc, score_document(doc, term, &extracted)))
        .filter(|(_, score)| *score > 0)
        .max_by_key(|(_, score)| *score)
        .map(|(doc, _)| doc)
}

fn score_document(doc: &AdminDocument, query: &str, extracted: &[String]) -> u32 {
    let title = doc.title.to_lowercase();
    let title_arabic = doc.title_arabic.as_deref().unwrap_or("").to_lowercase();
    let title_french = doc.title_french.as_deref().unwrap_or("").to_lowercase();
    let mut score = 0;

    for term in extracted {
        for t in [&title, &title_arabic, &title_french] {
            if !t.is_empty() {
                if t == term {
                    score += 100;
                }
                if t.contains(term.as_str()) {
                    score += 60;
                }
            }
        }
        for keyword in &doc.keywords {
            let keyword = keyword.to_lowercase();
            if keyword == *term {
                score += 90;
            }
            if keyword.contains(term.as_str()) {
                score += 40;
            }
        }
    }

    // raw query as a fallback signal
    for t in [&title, &title_arabic, &title_french] {
        if !t.is_empty() && t.contains(query) {
            score += 30;
        }
    }
    for keyword in &doc.keywords {
        if keyword.to_lowercase().contains(query) {
            score += 25;
        }
    }
    for req in &doc.requirements {
        if req.to_lowercase().contains(query) {
            score += 15;
        }
    }
    for name in &doc.documents {
        if name.to_lowercase().contains(query) {
            score += 10;
        }
    }

    score
}

/// Pull candidate document terms out of a natural-language query: canonical
/// names whose variations appear in it, plus residual significant words.
fn extract_document_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let push_unique = |term: String, terms: &mut Vec<String>| {
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    };

    for (canonical, variations) in DOCUMENT_MAPPINGS {
        for variation in *variations {
            if query.contains(&variation.to_lowercase()) {
                push_unique(canonical.to_string(), &mut terms);
                push_unique(variation.to_lowercase(), &mut terms);
            }
        }
    }

    for word in query.split_whitespace() {
        if word.chars().count() > 3 && !STOPWORDS.contains(&word) {
            push_unique(word.to_string(), &mut terms);
        }
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::super::sample_document;
    use super::*;

    fn fixture() -> Vec<AdminDocument> {
        vec![
            sample_document(
                "passport-new",
                "New Passport Application",
                &["passport", "جواز سفر", "passeport"],
            ),
            sample_document(
                "cin-new",
                "National ID Card (CIN)",
                &["cin", "identity card", "بطاقة هوية"],
            ),
            sample_document(
                "birth-certificate",
                "Birth Certificate",
                &["birth certificate", "شهادة الميلاد", "acte de naissance"],
            ),
        ]
    }

    #[test]
    fn action_plus_document_is_admin_query() {
        let docs = fixture();
        assert!(is_admin_query("how to get a passport", &docs));
        assert!(is_admin_query("comment obtenir un passeport", &docs));
        assert!(is_admin_query("كيف أحصل على جواز سفر", &docs));
    }

    #[test]
    fn stored_keyword_is_admin_query() {
        let docs = fixture();
        assert!(is_admin_query("wach lazem bach ndir cin", &docs));
    }

    #[test]
    fn chitchat_is_not_admin_query() {
        let docs = fixture();
        assert!(!is_admin_query("wach rak khoya", &docs));
        assert!(!is_admin_query("", &docs));
    }

    #[test]
    fn best_match_finds_passport_across_languages() {
        let docs = fixture();
        let hit = find_best_match("how to get a passport", &docs).unwrap();
        assert_eq!(hit.id, "passport-new");
        let hit = find_best_match("je veux un passeport", &docs).unwrap();
        assert_eq!(hit.id, "passport-new");
    }

    #[test]
    fn exact_keyword_beats_substring() {
        let a = sample_document("a", "Alpha Paper", &["carte"]);
        let b = sample_document("b", "Beta Paper", &["carte grise document"]);
        let docs = vec![a, b];
        let hit = find_best_match("carte", &docs).unwrap();
        assert_eq!(hit.id, "a");
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        let docs = fixture();
        assert!(find_best_match("couscous recipe", &docs).is_none());
    }

    #[test]
    fn extracted_terms_include_canonical_and_residual_words() {
        let terms = extract_document_terms("how to get a passeport fi oran");
        assert!(terms.contains(&"passport".to_string()));
        assert!(terms.contains(&"passeport".to_string()));
        assert!(terms.contains(&"oran".to_string()));
        assert!(!terms.contains(&"how".to_string()));
    }
}
