//! Filesystem utilities for atomic operations.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On Unix `rename(2)` already replaces the destination atomically, so a failure
/// leaves the destination untouched. On Windows `fs::rename` can fail when the
/// destination exists; there the destination is removed and the rename retried.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails (after the Windows fallback attempt).
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let result = fs::rename(temp_path, destination);
    #[cfg(windows)]
    let result = result.or_else(|initial_err| {
        // Only regular files are replaced; never remove a directory in the way.
        if destination.is_file() {
            let _ = fs::remove_file(destination);
        }
        fs::rename(temp_path, destination).map_err(|retry_err| {
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })
    });
    result.inspect_err(|_| {
        let _ = fs::remove_file(temp_path);
    })
}

/// Replace `destination` with `contents` without ever leaving a partially written file.
///
/// The bytes go to a sibling temp file which is flushed to disk and then renamed
/// over the destination. Missing parent directories are created.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(destination);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "library".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}
