//! Administrative-document lookup: a local store of Algerian paperwork
//! guides, searched with keyword scoring so common questions get answered
//! without an API round trip.

mod search;
mod storage;

pub use search::{find_best_match, is_admin_query};
pub use storage::Store;

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::format::FormattedMessage;

/// One paperwork guide: what it is, what you need, where to go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDocument {
    pub id: String,
    pub title: String,
    pub title_arabic: Option<String>,
    pub title_french: Option<String>,
    pub category: String,
    pub requirements: Vec<String>,
    pub steps: Vec<String>,
    pub documents: Vec<String>,
    pub fees: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCategory {
    pub id: String,
    pub name: String,
    pub name_arabic: Option<String>,
    pub name_french: Option<String>,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize)]
struct SeedFile {
    documents: Vec<AdminDocument>,
    categories: Vec<AdminCategory>,
}

const SEED_JSON: &str = include_str!("../../../config/admin-documents.json");

/// Built-in data, parsed on first access. The build script validates the
/// JSON, so this cannot fail at runtime.
fn seed() -> &'static SeedFile {
    static SEED: OnceLock<SeedFile> = OnceLock::new();
    SEED.get_or_init(|| serde_json::from_str(SEED_JSON).expect("admin-documents.json must be valid"))
}

pub fn default_documents() -> Vec<AdminDocument> {
    seed().documents.clone()
}

pub fn default_categories() -> Vec<AdminCategory> {
    seed().categories.clone()
}

/// Render a guide as a ready-to-display reply: title card, then
/// requirements and steps, then the practical details. Chunks are prebuilt
/// (the formatting pipeline would flatten the list layout).
pub fn answer(doc: &AdminDocument) -> FormattedMessage {
    FormattedMessage {
        chunks: card_chunks(doc),
        has_formatting: true,
        suggestions: vec![
            "Kemma el frais mte3 had el wraq?".to_string(),
            "Ch7al yakhod el wa9t?".to_string(),
            "Win nrouh bach ndirha?".to_string(),
        ],
    }
}

/// The display chunks of a guide card.
pub fn card_chunks(doc: &AdminDocument) -> Vec<String> {
    let mut chunks = Vec::new();

    let mut head = format!("**{}**", doc.title);
    if let Some(ar) = &doc.title_arabic {
        head.push('\n');
        head.push_str(ar);
    }
    if let Some(fr) = &doc.title_french {
        head.push('\n');
        head.push_str(fr);
    }
    chunks.push(head);

    if !doc.requirements.is_empty() {
        let mut part = String::from("Wach lazem:");
        for req in &doc.requirements {
            part.push_str("\n- ");
            part.push_str(req);
        }
        chunks.push(part);
    }

    if !doc.steps.is_empty() {
        let mut part = String::from("El khotwat:");
        for (i, step) in doc.steps.iter().enumerate() {
            part.push_str(&format!("\n{}. {}", i + 1, step));
        }
        chunks.push(part);
    }

    let mut details = Vec::new();
    if let Some(fees) = &doc.fees {
        details.push(format!("El frais: **{}**", fees));
    }
    if let Some(duration) = &doc.duration {
        details.push(format!("El mudda: {}", duration));
    }
    if let Some(location) = &doc.location {
        details.push(format!("Win: {}", location));
    }
    if let Some(notes) = &doc.notes {
        details.push(format!("Nota: {}", notes));
    }
    if !details.is_empty() {
        chunks.push(details.join("\n"));
    }

    chunks
}

#[cfg(test)]
pub(crate) fn sample_document(id: &str, title: &str, keywords: &[&str]) -> AdminDocument {
    AdminDocument {
        id: id.to_string(),
        title: title.to_string(),
        title_arabic: None,
        title_french: None,
        category: "other".to_string(),
        requirements: vec!["Valid ID".to_string()],
        steps: vec!["Go to the office".to_string()],
        documents: vec!["ID Card".to_string()],
        fees: Some("100 DA".to_string()),
        duration: None,
        location: None,
        notes: None,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
