//! In-memory storage backend.

use std::cell::{Cell, RefCell};

use crate::book::Book;
use crate::error::{Result, ShelfError};
use crate::storage::traits::BookStore;

/// Book store that keeps the last saved collection in memory.
///
/// Useful for ephemeral libraries and for exercising save failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Vec<Book>>,
    fail_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already saved collection.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            saved: RefCell::new(books),
            ..Self::default()
        }
    }

    /// Make every following `save` fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Snapshot of the last successfully saved collection.
    pub fn saved(&self) -> Vec<Book> {
        self.saved.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(ShelfError::Storage(
                "In-memory store is refusing writes".to_string(),
            ));
        }
        *self.saved.borrow_mut() = books.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::NewBook;

    #[test]
    fn test_save_replaces_collection() {
        let store = MemoryStore::new();
        let book = NewBook::new("a", "b", 2000, "x").into_book();

        store.save(&[book.clone(), book.clone()]).unwrap();
        store.save(std::slice::from_ref(&book)).unwrap();

        assert_eq!(store.load().unwrap(), vec![book]);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_failing_store_keeps_last_save() {
        let book = NewBook::new("a", "b", 2000, "x").into_book();
        let store = MemoryStore::with_books(vec![book.clone()]);
        store.set_fail_saves(true);

        assert!(store.save(&[]).unwrap_err().is_storage());
        assert_eq!(store.saved(), vec![book]);
        assert_eq!(store.save_count(), 0);
    }
}
