//! Conversation history: an index file plus one JSON file per conversation.

mod storage;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::paths;

/// Metadata for one saved conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMeta {
    pub id: String,
    pub title: String,
    /// Unix seconds of the last save.
    pub updated_at: u64,
}

/// One saved turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTurn {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
    pub timestamp: Option<u64>,
}

pub struct History {
    dir: PathBuf,
}

impl History {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The history in the platform data directory.
    pub fn open_default() -> Option<Self> {
        paths::data_dir().map(|d| Self::new(d.join("conversations")))
    }

    /// All conversations, most recently updated first. An absent index means
    /// an empty history (first run).
    pub fn list(&self) -> io::Result<Vec<ConversationMeta>> {
        let mut conversations = storage::load_index(&self.dir)?.conversations;
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(conversations)
    }

    /// Load one conversation's turns. `None` when absent or unreadable.
    pub fn load(&self, id: &str) -> Option<Vec<StoredTurn>> {
        storage::read_conversation(&self.dir, id)
    }

    /// Save a conversation, inserting or updating its index entry.
    pub fn save(&self, id: &str, title: &str, turns: &[StoredTurn]) -> io::Result<()> {
        storage::write_conversation(&self.dir, id, turns)?;

        let mut index = storage::load_index(&self.dir)?;
        let updated_at = unix_timestamp_secs();
        match index.conversations.iter_mut().find(|c| c.id == id) {
            Some(meta) => {
                meta.title = title.to_string();
                meta.updated_at = updated_at;
            }
            None => index.conversations.push(ConversationMeta {
                id: id.to_string(),
                title: title.to_string(),
                updated_at,
            }),
        }
        storage::save_index(&self.dir, &index)
    }

    /// Remove a conversation and its index entry.
    pub fn delete(&self, id: &str) -> io::Result<()> {
        storage::remove_conversation(&self.dir, id);
        let mut index = storage::load_index(&self.dir)?;
        index.conversations.retain(|c| c.id != id);
        storage::save_index(&self.dir, &index)
    }
}

pub(crate) fn unix_timestamp_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: &str, content: &str) -> StoredTurn {
        StoredTurn {
            role: role.to_string(),
            content: content.to_string(),
            timestamp: Some(1_700_000_000),
        }
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path());

        let turns = vec![turn("user", "wach rak?"), turn("assistant", "Labas!")];
        history.save("conv-1", "General Chat", &turns).unwrap();

        assert_eq!(history.load("conv-1").unwrap(), turns);
        let listed = history.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "General Chat");
    }

    #[test]
    fn list_is_empty_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path().join("missing"));
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn saving_again_updates_the_index_entry() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path());

        history.save("conv-1", "First", &[turn("user", "a")]).unwrap();
        history
            .save("conv-1", "Renamed", &[turn("user", "a"), turn("assistant", "b")])
            .unwrap();

        let listed = history.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Renamed");
        assert_eq!(history.load("conv-1").unwrap().len(), 2);
    }

    #[test]
    fn delete_removes_conversation_and_meta() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path());

        history.save("conv-1", "One", &[turn("user", "a")]).unwrap();
        history.delete("conv-1").unwrap();

        assert!(history.list().unwrap().is_empty());
        assert!(history.load("conv-1").is_none());
    }

    #[test]
    fn missing_conversation_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path());
        assert!(history.load("nope").is_none());
    }
}
