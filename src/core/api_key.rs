//! API key storage: persist the generative-language API key in the config
//! directory so one `chriki key set` survives across sessions.
//!
//! The key gets its own file with restrictive permissions (0o600 on Unix).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::core::paths;

/// Errors when loading or storing the API key.
#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to store API key: {0}")]
    Io(#[from] io::Error),
}

/// Path to the key file in the config directory.
pub fn credentials_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join("api-key"))
}

/// Load the stored key. `None` if the file is absent, empty, or unreadable.
pub fn load_api_key() -> Option<String> {
    let path = credentials_path()?;
    let content = fs::read_to_string(&path).ok()?;
    let key = content.trim().to_string();
    if key.is_empty() { None } else { Some(key) }
}

/// Store the key, creating the config dir if needed.
pub fn store_api_key(key: &str) -> Result<(), ApiKeyError> {
    let path = credentials_path().ok_or(ApiKeyError::NoConfigDir)?;
    let dir = path.parent().ok_or(ApiKeyError::NoConfigDir)?;
    fs::create_dir_all(dir)?;

    let mut file = fs::File::create(&path)?;
    file.write_all(key.trim().as_bytes())?;
    file.write_all(b"\n")?;

    #[cfg(unix)]
    {
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Masked form for display: only the last 4 characters stay visible.
pub fn masked(key: &str) -> String {
    let tail: Vec<char> = key.chars().rev().take(4).collect();
    let visible: String = tail.into_iter().rev().collect();
    format!("****{}", visible)
}

#[cfg(test)]
mod tests {
    use super::{load_api_key, masked, store_api_key};

    #[test]
    fn roundtrip_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("CHRIKI_TEST_CONFIG_DIR", dir.path()) };

        store_api_key("  AIza-test-key-123\n").unwrap();
        let loaded = load_api_key();
        assert_eq!(loaded.as_deref(), Some("AIza-test-key-123"));

        unsafe { std::env::remove_var("CHRIKI_TEST_CONFIG_DIR") };
    }

    #[test]
    fn masked_shows_tail_only() {
        assert_eq!(masked("AIza-secret-key-9876"), "****9876");
    }
}
