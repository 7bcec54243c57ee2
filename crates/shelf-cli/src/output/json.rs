//! JSON output formatting.

use shelf_core::{Book, Stats};

/// Convert a book to JSON, tagged with its 1-based position.
pub fn book_json(position: usize, book: &Book) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(book)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("position".to_string(), serde_json::json!(position));
    }
    Ok(value)
}

/// Convert positioned books to a JSON array.
pub fn books_json(books: &[(usize, &Book)]) -> anyhow::Result<serde_json::Value> {
    let items = books
        .iter()
        .map(|(position, book)| book_json(*position, book))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(serde_json::Value::Array(items))
}

/// Convert stats to JSON.
pub fn stats_json(stats: &Stats) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(stats)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{Library, MemoryStore};

    #[test]
    fn test_book_json_includes_position_and_durable_keys() {
        let mut library = Library::open(MemoryStore::new());
        let book = library.add("Emma", "Jane Austen", 1815, "Romance", true).unwrap();

        let value = book_json(3, &book).unwrap();
        assert_eq!(value["position"], 3);
        assert_eq!(value["title"], "Emma");
        assert_eq!(value["read_status"], true);
        assert!(value["added_date"].is_string());
    }

    #[test]
    fn test_stats_json_shape() {
        let mut library = Library::open(MemoryStore::new());
        library.add("A", "x", 1985, "Fiction", true).unwrap();
        library.add("B", "y", 1992, "Fiction", false).unwrap();

        let value = stats_json(&library.aggregate()).unwrap();
        assert_eq!(value["total_books"], 2);
        assert_eq!(value["percent_read"], 50.0);
        assert_eq!(value["genre_counts"][0]["label"], "Fiction");
        assert_eq!(value["genre_counts"][0]["count"], 2);
        assert_eq!(value["decade_counts"]["1980"], 1);
    }
}
