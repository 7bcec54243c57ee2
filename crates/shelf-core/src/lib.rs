//! # Shelf Core
//!
//! Core library for Shelf - a personal book catalogue.
//!
//! This crate owns the book collection, its durable file, and the operations
//! over it, independent of any user interface.
//!
//! ## Architecture
//!
//! - **book**: The book record, its builder and input validation
//! - **storage**: Storage adapter trait and implementations (JSON file, memory)
//! - **library**: The library engine (add, remove, toggle, search, aggregate)
//! - **stats**: Aggregate statistics over a collection
//! - **fs**: Atomic file replacement helpers

pub mod book;
pub mod error;
pub mod fs;
pub mod library;
pub mod stats;
pub mod storage;

pub use book::{Book, NewBook};
pub use error::{Result, ShelfError};
pub use library::{Library, SearchField};
pub use stats::{Stats, TallyEntry};
pub use storage::{BookStore, JsonFileStore, MemoryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
