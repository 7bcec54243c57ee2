//! Storage abstraction layer for Shelf.
//!
//! This module defines the storage adapter interface and its implementations.
//! Storage is whole-collection only: every load reads the full collection and
//! every save rewrites it.

mod json_file;
mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::BookStore;
