//! Path resolution for config and library files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_library_path, ShelfConfig};

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHELF_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the library file path.
///
/// Order: `--library` / `SHELF_PATH`, then the config file, then the XDG default.
pub fn resolve_library_path(
    flag: Option<&str>,
    config: Option<&ShelfConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.library.path));
    }
    default_library_path()
}
