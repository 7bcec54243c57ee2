//! The book record and its builder.
//!
//! A `Book` serializes to exactly the keys of the durable file:
//! `title`, `author`, `publication_year`, `genre`, `read_status`, `added_date`.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// Earliest publication year accepted when adding a book.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// Genres offered by the interactive front ends.
///
/// The engine accepts any genre text; this list only drives prompts and warnings.
pub const KNOWN_GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Science",
    "Tech",
    "Fantasy",
    "Romance",
    "Poetry",
    "History",
    "Religion",
    "Others",
];

/// Genre used when a front end does not ask for one.
pub const DEFAULT_GENRE: &str = "Others";

/// Check whether a genre is in [`KNOWN_GENRES`], ignoring case.
pub fn is_known_genre(genre: &str) -> bool {
    KNOWN_GENRES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(genre.trim()))
}

/// Decade bucket for a year: `(year // 10) * 10` with floor division.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// A catalogued book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,

    pub author: String,

    pub publication_year: i32,

    /// Free-form genre text
    pub genre: String,

    /// Whether the book has been read
    pub read_status: bool,

    /// When the book was added; set once, never changed
    #[serde(with = "added_date_format")]
    pub added_date: NaiveDateTime,
}

impl Book {
    /// Flip the read status and return the new value.
    pub(crate) fn toggle_read(&mut self) -> bool {
        self.read_status = !self.read_status;
        self.read_status
    }
}

/// Builder for creating new books.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
    pub read_status: bool,

    /// Optional: explicit added date (defaults to now when the book is added)
    pub added_date: Option<NaiveDateTime>,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            read_status: false,
            added_date: None,
        }
    }

    pub fn read(mut self, read_status: bool) -> Self {
        self.read_status = read_status;
        self
    }

    pub fn with_added_date(mut self, added_date: NaiveDateTime) -> Self {
        self.added_date = Some(added_date);
        self
    }

    /// Check the per-record invariants against the given current year.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Validation` if:
    /// - Title or author is empty or whitespace only
    /// - Publication year is outside `MIN_PUBLICATION_YEAR..=current_year`
    pub fn validate(&self, current_year: i32) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ShelfError::Validation("Title cannot be empty".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(ShelfError::Validation("Author cannot be empty".to_string()));
        }
        if !(MIN_PUBLICATION_YEAR..=current_year).contains(&self.publication_year) {
            return Err(ShelfError::Validation(format!(
                "Publication year {} must be between {} and {}",
                self.publication_year, MIN_PUBLICATION_YEAR, current_year
            )));
        }
        Ok(())
    }

    /// Turn the builder into a record, stamping `added_date` if unset.
    pub(crate) fn into_book(self) -> Book {
        let added_date = self
            .added_date
            .unwrap_or_else(|| Local::now().naive_local())
            .trunc_subsecs(0);
        Book {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            genre: self.genre,
            read_status: self.read_status,
            added_date,
        }
    }
}

/// Serde helpers for the `YYYY-MM-DD HH:MM:SS` timestamp format.
pub mod added_date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    #[test]
    fn test_new_book_builder() {
        let book = NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction")
            .read(true)
            .with_added_date(fixed_date());

        assert_eq!(book.title, "Dune");
        assert_eq!(book.publication_year, 1965);
        assert!(book.read_status);
        assert_eq!(book.added_date, Some(fixed_date()));
    }

    #[test]
    fn test_validate_rejects_blank_title_and_author() {
        let err = NewBook::new("   ", "Someone", 2000, "Fiction")
            .validate(2025)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Title"));

        let err = NewBook::new("Something", "", 2000, "Fiction")
            .validate(2025)
            .unwrap_err();
        assert!(err.to_string().contains("Author"));
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(NewBook::new("a", "b", 1000, "x").validate(2025).is_ok());
        assert!(NewBook::new("a", "b", 2025, "x").validate(2025).is_ok());
        assert!(NewBook::new("a", "b", 999, "x").validate(2025).is_err());
        assert!(NewBook::new("a", "b", 2026, "x").validate(2025).is_err());
    }

    #[test]
    fn test_validate_accepts_unknown_genre() {
        assert!(NewBook::new("a", "b", 1999, "Cyberpunk Noir")
            .validate(2025)
            .is_ok());
        assert!(!is_known_genre("Cyberpunk Noir"));
        assert!(is_known_genre("non-fiction"));
    }

    #[test]
    fn test_into_book_drops_subseconds() {
        let with_nanos = fixed_date() + chrono::Duration::milliseconds(750);
        let book = NewBook::new("a", "b", 1999, "x")
            .with_added_date(with_nanos)
            .into_book();
        assert_eq!(book.added_date, fixed_date());
    }

    #[test]
    fn test_book_json_shape() {
        let book = NewBook::new("Emma", "Jane Austen", 1815, "Romance")
            .with_added_date(fixed_date())
            .into_book();
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Emma",
                "author": "Jane Austen",
                "publication_year": 1815,
                "genre": "Romance",
                "read_status": false,
                "added_date": "2025-03-14 09:26:53"
            })
        );
    }

    #[test]
    fn test_book_rejects_unknown_keys() {
        let raw = r#"{"title":"a","author":"b","publication_year":2000,"genre":"x",
            "read_status":true,"added_date":"2025-03-14 09:26:53","rating":5}"#;
        assert!(serde_json::from_str::<Book>(raw).is_err());
    }

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1985), 1980);
        assert_eq!(decade_of(1990), 1990);
        assert_eq!(decade_of(1999), 1990);
        assert_eq!(decade_of(-5), -10);
    }
}
