//! Centralized path helpers for the config and data directories.

use std::path::PathBuf;

/// Project directories (config, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("dz", "chriki", "chriki")
}

/// Override config dir for tests via env var.
#[cfg(test)]
fn test_config_dir_override() -> Option<PathBuf> {
    std::env::var("CHRIKI_TEST_CONFIG_DIR").ok().map(PathBuf::from)
}

/// Config directory (~/.config/chriki/). In tests, set
/// `CHRIKI_TEST_CONFIG_DIR` to override.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(test)]
    if let Some(p) = test_config_dir_override() {
        return Some(p);
    }
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Data directory (~/.local/share/chriki/), parent of the conversation and
/// admin stores.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_dir().to_path_buf())
}
