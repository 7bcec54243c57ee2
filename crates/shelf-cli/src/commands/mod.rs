//! Command handlers, one module per concern.

pub mod books;
pub mod init;
pub mod misc;
pub mod search;
pub mod stats;
