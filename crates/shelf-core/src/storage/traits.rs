//! Storage adapter trait definition.
//!
//! The `BookStore` trait defines the interface that all storage backends
//! must implement, so the library engine can persist without knowing
//! where the collection lives.

use crate::book::Book;
use crate::error::Result;

/// Whole-collection durable storage for books.
///
/// All implementations must ensure:
/// - `load` returns books in the order they were saved
/// - `save` replaces the previous collection entirely
/// - A failed `save` leaves the previously saved collection readable
pub trait BookStore {
    /// Load the entire collection.
    ///
    /// Returns an empty collection when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if saved data exists but cannot be read
    /// or is not a valid book collection.
    fn load(&self) -> Result<Vec<Book>>;

    /// Persist the entire collection, replacing what was saved before.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the write cannot complete.
    fn save(&self, books: &[Book]) -> Result<()>;

    /// Human-readable location of the store, for messages and logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn BookStore) {}
    }
}
