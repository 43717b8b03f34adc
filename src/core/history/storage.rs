//! Index and conversation file persistence (index.json, conv_*.json).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConversationMeta, StoredTurn};

fn index_path(dir: &Path) -> PathBuf {
    dir.join("index.json")
}

fn conv_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("conv_{}.json", id))
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct IndexFile {
    pub(super) conversations: Vec<ConversationMeta>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConvFile {
    turns: Vec<StoredTurn>,
}

/// Load the index. Absent file means an empty index (first run); IO and
/// parse errors propagate.
pub(super) fn load_index(dir: &Path) -> io::Result<IndexFile> {
    let data = match fs::read_to_string(index_path(dir)) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(IndexFile::default()),
        Err(e) => return Err(e),
    };
    serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub(super) fn save_index(dir: &Path, index: &IndexFile) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    write_atomic(&index_path(dir), index)
}

pub(super) fn read_conversation(dir: &Path, id: &str) -> Option<Vec<StoredTurn>> {
    let data = fs::read_to_string(conv_path(dir, id)).ok()?;
    let file: ConvFile = serde_json::from_str(&data).ok()?;
    Some(file.turns)
}

pub(super) fn write_conversation(dir: &Path, id: &str, turns: &[StoredTurn]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let file = ConvFile {
        turns: turns.to_vec(),
    };
    write_atomic(&conv_path(dir, id), &file)
}

pub(super) fn remove_conversation(dir: &Path, id: &str) {
    let _ = fs::remove_file(conv_path(dir, id));
}

fn write_atomic<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)
}
