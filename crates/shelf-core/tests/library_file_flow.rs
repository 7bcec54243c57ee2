use std::collections::BTreeMap;
use std::fs;

use chrono::{Local, SubsecRound};
use shelf_core::storage::{BookStore, JsonFileStore};
use shelf_core::{Library, SearchField};
use tempfile::tempdir;

#[test]
fn test_add_to_empty_library_then_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("library.json");

    let mut library = Library::open(JsonFileStore::new(&path));
    assert!(library.is_empty());
    assert!(library.load_error().is_none());

    let before = Local::now().naive_local().trunc_subsecs(0);
    let book = library
        .add("Dune", "Herbert", 1965, "Science Fiction", false)
        .expect("add should succeed");
    let after = Local::now().naive_local();

    assert!(!book.read_status);
    assert_eq!(book.added_date, book.added_date.trunc_subsecs(0));
    assert!(before <= book.added_date && book.added_date <= after);

    assert_eq!(library.len(), 1);
    let stats = library.aggregate();
    assert_eq!(stats.total_books, 1);
    assert_eq!(stats.percent_read, 0.0);

    let reopened = Library::open(JsonFileStore::new(&path));
    assert_eq!(reopened.books(), &[book]);
}

#[test]
fn test_load_save_round_trip_is_identical() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("library.json");
    let seeded = r#"[
  {
    "title": "Emma",
    "author": "Jane Austen",
    "publication_year": 1815,
    "genre": "Romance",
    "read_status": true,
    "added_date": "2025-02-01 10:00:00"
  },
  {
    "title": "Neuromancer",
    "author": "William Gibson",
    "publication_year": 1984,
    "genre": "Cyberpunk",
    "read_status": false,
    "added_date": "2025-02-02 11:30:15"
  }
]
"#;
    fs::write(&path, seeded).expect("seed file");

    let store = JsonFileStore::new(&path);
    let books = store.load().expect("load should succeed");
    store.save(&books).expect("save should succeed");

    assert_eq!(fs::read_to_string(&path).expect("read back"), seeded);
    assert_eq!(store.load().expect("reload"), books);
}

#[test]
fn test_malformed_file_degrades_to_empty_library() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("library.json");
    fs::write(&path, "[{\"title\": \"broken\"").expect("seed file");

    let library = Library::open(JsonFileStore::new(&path));

    assert!(library.is_empty());
    let err = library.load_error().expect("load error should be reported");
    assert!(err.is_storage());
    // Opening alone never touches the unreadable file.
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        "[{\"title\": \"broken\""
    );
}

#[test]
fn test_decades_from_two_books() {
    let dir = tempdir().expect("tempdir");
    let mut library = Library::open(JsonFileStore::new(dir.path().join("library.json")));
    library
        .add("Neuromancer", "Gibson", 1985, "Fiction", true)
        .expect("add");
    library
        .add("Snow Crash", "Stephenson", 1992, "Fiction", false)
        .expect("add");

    let expected: BTreeMap<i32, usize> = [(1980, 1), (1990, 1)].into_iter().collect();
    let stats = library.aggregate();
    assert_eq!(stats.decade_counts, expected);
    assert_eq!(stats.percent_read, 50.0);
}

#[test]
fn test_mutations_are_persisted_immediately() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("library.json");
    let mut library = Library::open(JsonFileStore::new(&path));
    library.add("A", "x", 2001, "g", false).expect("add");
    library.add("B", "y", 2002, "g", false).expect("add");
    library.add("C", "z", 2003, "g", false).expect("add");

    library.toggle_read_status(2).expect("toggle");
    library.remove(0).expect("remove");

    let reopened = Library::open(JsonFileStore::new(&path));
    let titles: Vec<&str> = reopened.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);
    assert!(reopened.books()[1].read_status);
    assert!(reopened.search("a", SearchField::Title).is_empty());
}
