//! Aggregate statistics over a book collection.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::book::{decade_of, Book};

/// A label and how many books carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub label: String,
    pub count: usize,
}

/// Summary of a collection, as returned by `Library::aggregate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_books: usize,
    pub read_books: usize,
    pub unread_books: usize,

    /// `read_books / total_books * 100`, or 0 for an empty collection
    pub percent_read: f64,

    /// Descending by count; ties keep first-seen order
    pub genre_counts: Vec<TallyEntry>,

    /// Descending by count; ties keep first-seen order
    pub author_counts: Vec<TallyEntry>,

    /// Ascending by decade
    pub decade_counts: BTreeMap<i32, usize>,
}

impl Stats {
    pub fn from_books(books: &[Book]) -> Self {
        let total_books = books.len();
        let read_books = books.iter().filter(|book| book.read_status).count();
        let percent_read = if total_books == 0 {
            0.0
        } else {
            read_books as f64 / total_books as f64 * 100.0
        };

        let mut decade_counts = BTreeMap::new();
        for book in books {
            *decade_counts
                .entry(decade_of(book.publication_year))
                .or_insert(0) += 1;
        }

        Self {
            total_books,
            read_books,
            unread_books: total_books - read_books,
            percent_read,
            genre_counts: tally(books.iter().map(|book| book.genre.as_str())),
            author_counts: tally(books.iter().map(|book| book.author.as_str())),
            decade_counts,
        }
    }

    /// Count for a genre, or 0 if absent.
    pub fn genre_count(&self, genre: &str) -> usize {
        lookup(&self.genre_counts, genre)
    }

    /// Count for an author, or 0 if absent.
    pub fn author_count(&self, author: &str) -> usize {
        lookup(&self.author_counts, author)
    }
}

fn lookup(entries: &[TallyEntry], label: &str) -> usize {
    entries
        .iter()
        .find(|entry| entry.label == label)
        .map(|entry| entry.count)
        .unwrap_or(0)
}

/// Count labels in first-seen order, then stable-sort by descending count.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<TallyEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<TallyEntry> = Vec::new();

    for label in labels {
        match positions.get(label) {
            Some(&index) => entries[index].count += 1,
            None => {
                positions.insert(label, entries.len());
                entries.push(TallyEntry {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
