//! JSON file storage backend.
//!
//! The durable file is a pretty-printed JSON array of book objects. Saves go
//! through a temp file and an atomic rename so a failed write never truncates
//! the previous library.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::book::Book;
use crate::error::{Result, ShelfError};
use crate::fs::write_atomic;
use crate::storage::traits::BookStore;

/// Book store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> ShelfError {
        ShelfError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no library file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.storage_error("read", err)),
        };

        let books: Vec<Book> =
            serde_json::from_str(&contents).map_err(|e| self.storage_error("parse", e))?;
        tracing::debug!(path = %self.path.display(), count = books.len(), "loaded library");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        let mut contents =
            serde_json::to_vec_pretty(books).map_err(|e| self.storage_error("encode", e))?;
        contents.push(b'\n');
        write_atomic(&self.path, &contents).map_err(|e| self.storage_error("write", e))?;
        tracing::debug!(path = %self.path.display(), count = books.len(), "saved library");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
