//! Build script: validates the admin document seed data at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let seed_path: PathBuf = [&manifest_dir, "config", "admin-documents.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", seed_path.display());
    let json = std::fs::read_to_string(&seed_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. admin-documents.json must exist and be valid.",
            seed_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct SeedDocument {
        id: String,
        title: String,
        title_arabic: Option<String>,
        title_french: Option<String>,
        category: String,
        requirements: Vec<String>,
        steps: Vec<String>,
        documents: Vec<String>,
        fees: Option<String>,
        duration: Option<String>,
        location: Option<String>,
        notes: Option<String>,
        keywords: Vec<String>,
        created_at: String,
        updated_at: String,
    }
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct SeedCategory {
        id: String,
        name: String,
        name_arabic: Option<String>,
        name_french: Option<String>,
        description: String,
        icon: String,
    }
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct SeedFile {
        documents: Vec<SeedDocument>,
        categories: Vec<SeedCategory>,
    }
    let seed: SeedFile = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "admin-documents.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    for doc in &seed.documents {
        if !seed.categories.iter().any(|c| c.id == doc.category) {
            panic!(
                "admin-documents.json: document '{}' references unknown category '{}'",
                doc.id, doc.category
            );
        }
    }
}
