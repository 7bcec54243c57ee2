//! The library engine.
//!
//! `Library` owns the ordered book collection and persists it through a
//! [`BookStore`] after every mutation. Books are addressed by their 0-based
//! position in the collection.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};

use crate::book::{Book, NewBook};
use crate::error::{Result, ShelfError};
use crate::stats::Stats;
use crate::storage::BookStore;

/// Field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Genre];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        }
    }

    fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Genre => &book.genre,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| {
                ShelfError::InvalidInput(format!(
                    "Unknown search field \"{}\" (expected title, author or genre)",
                    value
                ))
            })
    }
}

/// An explicitly owned book collection bound to its store.
pub struct Library<S: BookStore> {
    store: S,
    books: Vec<Book>,
    load_error: Option<ShelfError>,
}

impl<S: BookStore> Library<S> {
    /// Load the collection from `store`.
    ///
    /// A load failure does not abort: the library starts empty for this
    /// session and the error is kept for the caller via [`Library::load_error`].
    pub fn open(store: S) -> Self {
        match store.load() {
            Ok(books) => Self {
                store,
                books,
                load_error: None,
            },
            Err(err) => {
                tracing::warn!(
                    store = %store.describe(),
                    error = %err,
                    "could not load library, continuing with an empty collection"
                );
                Self {
                    store,
                    books: Vec::new(),
                    load_error: Some(err),
                }
            }
        }
    }

    /// The error that made `open` fall back to an empty collection, if any.
    pub fn load_error(&self) -> Option<&ShelfError> {
        self.load_error.as_ref()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Add a book with `added_date` set to now.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Validation` for a blank title/author or an
    /// out-of-range year, and `ShelfError::Storage` if persisting fails
    /// (the book stays in memory in that case).
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        publication_year: i32,
        genre: &str,
        read_status: bool,
    ) -> Result<Book> {
        self.add_book(NewBook::new(title, author, publication_year, genre).read(read_status))
    }

    /// Add a book from a builder.
    pub fn add_book(&mut self, new_book: NewBook) -> Result<Book> {
        new_book.validate(Local::now().year())?;
        let book = new_book.into_book();
        self.books.push(book.clone());
        tracing::debug!(title = %book.title, index = self.books.len() - 1, "added book");
        self.persist()?;
        Ok(book)
    }

    /// Remove and return the book at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::OutOfRange` if `index >= len`, and
    /// `ShelfError::Storage` if persisting fails (the removal is kept).
    pub fn remove(&mut self, index: usize) -> Result<Book> {
        self.check_index(index)?;
        let removed = self.books.remove(index);
        tracing::debug!(title = %removed.title, index, "removed book");
        self.persist()?;
        Ok(removed)
    }

    /// Flip the read status of the book at `index` and return the new value.
    ///
    /// # Errors
    ///
    /// Same as [`Library::remove`].
    pub fn toggle_read_status(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let read_status = self.books[index].toggle_read();
        tracing::debug!(index, read_status, "toggled read status");
        self.persist()?;
        Ok(read_status)
    }

    /// Books whose `field` contains `term`, ignoring case, in collection order.
    ///
    /// An empty term matches every book.
    pub fn search(&self, term: &str, field: SearchField) -> Vec<&Book> {
        self.search_positions(term, field)
            .into_iter()
            .map(|(_, book)| book)
            .collect()
    }

    /// Like [`Library::search`], but each hit carries its 0-based index in the collection.
    pub fn search_positions(&self, term: &str, field: SearchField) -> Vec<(usize, &Book)> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .enumerate()
            .filter(|(_, book)| field.value_of(book).to_lowercase().contains(&needle))
            .collect()
    }

    /// Compute statistics over the current collection.
    pub fn aggregate(&self) -> Stats {
        Stats::from_books(&self.books)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.books.len() {
            return Err(ShelfError::OutOfRange {
                index,
                len: self.books.len(),
            });
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.books).inspect_err(|err| {
            tracing::error!(
                store = %self.store.describe(),
                error = %err,
                "library change is not saved"
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn library_with(titles: &[(&str, &str, &str)]) -> Library<MemoryStore> {
        let mut library = Library::open(MemoryStore::new());
        for (title, author, genre) in titles {
            library.add(title, author, 1990, genre, false).unwrap();
        }
        library
    }

    #[test]
    fn test_search_field_parse() {
        assert_eq!("Title".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("AUTHOR".parse::<SearchField>().unwrap(), SearchField::Author);
        assert_eq!(" genre ".parse::<SearchField>().unwrap(), SearchField::Genre);
        let err = "year".parse::<SearchField>().unwrap_err();
        assert!(matches!(err, ShelfError::InvalidInput(_)));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut library = Library::open(MemoryStore::new());
        let book = library
            .add("Dune", "Herbert", 1965, "Science Fiction", false)
            .unwrap();

        assert_eq!(library.len(), 1);
        assert_eq!(library.books()[0], book);
        assert_eq!(library.store().saved(), vec![book]);
    }

    #[test]
    fn test_add_rejects_blank_fields_without_saving() {
        let mut library = Library::open(MemoryStore::new());
        let err = library.add("", "Herbert", 1965, "x", false).unwrap_err();
        assert!(err.is_validation());
        let err = library.add("Dune", " ", 1965, "x", false).unwrap_err();
        assert!(err.is_validation());
        let err = library.add("Dune", "Herbert", 42, "x", false).unwrap_err();
        assert!(err.is_validation());

        assert!(library.is_empty());
        assert_eq!(library.store().save_count(), 0);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let library = library_with(&[("Emma", "Austen", "Romance"), ("Emma", "Austen", "Romance")]);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_remove_returns_book_and_shifts_positions() {
        let mut library = library_with(&[("A", "x", "g"), ("B", "x", "g"), ("C", "x", "g")]);
        let removed = library.remove(1).unwrap();

        assert_eq!(removed.title, "B");
        let titles: Vec<&str> = library.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(library.store().saved().len(), 2);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut library = library_with(&[("A", "x", "g")]);
        let err = library.remove(1).unwrap_err();
        assert!(matches!(err, ShelfError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut library = library_with(&[("A", "x", "g")]);
        assert!(library.toggle_read_status(0).unwrap());
        assert!(library.store().saved()[0].read_status);
        assert!(!library.toggle_read_status(0).unwrap());
        assert!(!library.books()[0].read_status);
    }

    #[test]
    fn test_toggle_keeps_added_date() {
        let mut library = library_with(&[("A", "x", "g")]);
        let before = library.books()[0].added_date;
        library.toggle_read_status(0).unwrap();
        assert_eq!(library.books()[0].added_date, before);
    }

    #[test]
    fn test_toggle_out_of_range_on_empty() {
        let mut library = Library::open(MemoryStore::new());
        assert!(library.toggle_read_status(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let library = library_with(&[
            ("Emma", "Jane Austen", "Romance"),
            ("Dune", "Frank Herbert", "Science"),
        ]);
        for term in ["austen", "AUSTEN", "Jane A"] {
            let hits = library.search(term, SearchField::Author);
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].title, "Emma");
        }
        assert!(library.search("austen", SearchField::Title).is_empty());
        assert_eq!(library.search("SCI", SearchField::Genre).len(), 1);
    }

    #[test]
    fn test_empty_term_matches_all_in_order() {
        let library = library_with(&[("C", "x", "g"), ("A", "x", "g"), ("B", "x", "g")]);
        let titles: Vec<&str> = library
            .search("", SearchField::Title)
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_search_positions_index_into_full_collection() {
        let library = library_with(&[
            ("Emma", "Jane Austen", "Romance"),
            ("Dune", "Frank Herbert", "Science"),
            ("Persuasion", "Jane Austen", "Romance"),
        ]);
        let hits = library.search_positions("austen", SearchField::Author);
        let indexes: Vec<usize> = hits.iter().map(|(index, _)| *index).collect();
        assert_eq!(indexes, vec![0, 2]);
        assert_eq!(hits[1].1.title, "Persuasion");

        let all = library.search_positions("", SearchField::Title);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|(index, book)| library.get(*index) == Some(*book)));
    }

    #[test]
    fn test_removed_book_is_not_found() {
        let mut library = library_with(&[("Emma", "Austen", "g"), ("Dune", "Herbert", "g")]);
        library.remove(0).unwrap();
        assert!(library.search("emma", SearchField::Title).is_empty());
    }

    #[test]
    fn test_save_failure_keeps_mutation() {
        let mut library = library_with(&[("A", "x", "g")]);
        library.store().set_fail_saves(true);

        let err = library.add("B", "y", 2001, "g", true).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(library.len(), 2);
        assert_eq!(library.store().saved().len(), 1);

        assert!(library.toggle_read_status(0).unwrap_err().is_storage());
        assert!(library.books()[0].read_status);
    }

    #[test]
    fn test_aggregate_is_pure_and_repeatable() {
        let library = library_with(&[("A", "x", "g"), ("B", "y", "h")]);
        let saves = library.store().save_count();
        assert_eq!(library.aggregate(), library.aggregate());
        assert_eq!(library.store().save_count(), saves);
    }

    #[test]
    fn test_open_reads_existing_collection() {
        let seeded = library_with(&[("A", "x", "g")]).into_store();
        let library = Library::open(seeded);
        assert_eq!(library.len(), 1);
        assert!(library.load_error().is_none());
    }
}
