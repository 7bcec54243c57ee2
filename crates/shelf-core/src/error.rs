//! Error types for Shelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A required field is blank or a value is outside its allowed range
    #[error("Validation error: {0}")]
    Validation(String),

    /// A positional index does not address a book in the collection
    #[error("Index {index} is out of range (library has {len} book(s))")]
    OutOfRange { index: usize, len: usize },

    /// Loading or saving the durable file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid caller input (e.g. an unknown search field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShelfError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ShelfError::Validation(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ShelfError::OutOfRange { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, ShelfError::Storage(_))
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ShelfError::OutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 5 is out of range (library has 2 book(s))"
        );
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ShelfError = io.into();
        assert!(err.is_storage());
        assert!(err.to_string().contains("denied"));
    }
}
