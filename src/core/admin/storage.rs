//! JSON-file persistence for the admin store: `documents.json` and
//! `categories.json` under the data directory, written atomically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::core::paths;

use super::{AdminCategory, AdminDocument, default_categories, default_documents};

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store in the platform data directory.
    pub fn open_default() -> Option<Self> {
        paths::data_dir().map(|d| Self::new(d.join("admin")))
    }

    fn documents_path(&self) -> PathBuf {
        self.dir.join("documents.json")
    }

    fn categories_path(&self) -> PathBuf {
        self.dir.join("categories.json")
    }

    /// Write the seed data for any file that does not exist yet.
    pub fn initialize(&self) -> io::Result<()> {
        if !self.documents_path().exists() {
            write_json(&self.documents_path(), &default_documents())?;
        }
        if !self.categories_path().exists() {
            write_json(&self.categories_path(), &default_categories())?;
        }
        Ok(())
    }

    /// All documents. A missing or corrupt file degrades to the seed data
    /// (corruption is logged, never fatal).
    pub fn documents(&self) -> Vec<AdminDocument> {
        read_json(&self.documents_path()).unwrap_or_else(default_documents)
    }

    pub fn categories(&self) -> Vec<AdminCategory> {
        read_json(&self.categories_path()).unwrap_or_else(default_categories)
    }

    pub fn document_by_id(&self, id: &str) -> Option<AdminDocument> {
        self.documents().into_iter().find(|d| d.id == id)
    }

    pub fn documents_by_category(&self, category: &str) -> Vec<AdminDocument> {
        self.documents()
            .into_iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Insert or update a document. Updates refresh `updated_at`; inserts
    /// stamp both timestamps.
    pub fn save_document(&self, mut doc: AdminDocument) -> io::Result<()> {
        let mut docs = self.documents();
        doc.updated_at = Utc::now();
        match docs.iter_mut().find(|d| d.id == doc.id) {
            Some(slot) => *slot = doc,
            None => {
                doc.created_at = doc.updated_at;
                docs.push(doc);
            }
        }
        write_json(&self.documents_path(), &docs)
    }

    /// Remove a document. Returns whether anything was deleted.
    pub fn delete_document(&self, id: &str) -> io::Result<bool> {
        let mut docs = self.documents();
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Ok(false);
        }
        write_json(&self.documents_path(), &docs)?;
        Ok(true)
    }

    /// Case-insensitive substring search over titles, keywords, requirements
    /// and document names. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<AdminDocument> {
        let term = query.to_lowercase();
        let term = term.trim();
        if term.is_empty() {
            return self.documents();
        }
        self.documents()
            .into_iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(term)
                    || doc
                        .title_arabic
                        .as_deref()
                        .is_some_and(|t| t.to_lowercase().contains(term))
                    || doc
                        .title_french
                        .as_deref()
                        .is_some_and(|t| t.to_lowercase().contains(term))
                    || doc.keywords.iter().any(|k| k.to_lowercase().contains(term))
                    || doc
                        .requirements
                        .iter()
                        .any(|r| r.to_lowercase().contains(term))
                    || doc
                        .documents
                        .iter()
                        .any(|d| d.to_lowercase().contains(term))
            })
            .collect()
    }

    /// Everything in the store as one JSON value, for backup.
    pub fn export(&self) -> serde_json::Value {
        json!({
            "documents": self.documents(),
            "categories": self.categories(),
        })
    }

    /// Replace the store contents from an `export` payload.
    pub fn import(&self, data: &serde_json::Value) -> io::Result<()> {
        if let Some(docs) = data.get("documents") {
            let docs: Vec<AdminDocument> = serde_json::from_value(docs.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            write_json(&self.documents_path(), &docs)?;
        }
        if let Some(cats) = data.get("categories") {
            let cats: Vec<AdminCategory> = serde_json::from_value(cats.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            write_json(&self.categories_path(), &cats)?;
        }
        Ok(())
    }

    /// Drop everything and re-seed.
    pub fn reset(&self) -> io::Result<()> {
        for path in [self.documents_path(), self.categories_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        self.initialize()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Corrupt store file {}: {}", path.display(), e);
            None
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)
}
