//! Output formatting for books and statistics.
//!
//! Books are always shown with their 1-based position, which is what
//! `shelf remove` and `shelf toggle` take.

mod json;
mod text;

pub use json::{books_json, stats_json};
pub use text::{print_book_list, print_stats};
