//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes, so scripts can tell a bad
//! position from an unreadable library file.

use std::fmt;

use shelf_core::ShelfError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// No book at a position, or another missing resource
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The library file cannot be used
    Storage {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\nHint: {}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Storage { message, hint } => match hint {
                Some(h) => write!(f, "{}\nHint: {}", message, h),
                None => write!(f, "{}", message),
            },
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a Storage error with a hint.
    pub fn storage_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Storage {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Storage { .. } => exit_codes::STORAGE_FAILED,
        }
    }
}

impl From<ShelfError> for CliError {
    fn from(err: ShelfError) -> Self {
        match err {
            ShelfError::OutOfRange { index, len } => CliError::not_found(
                format!("No book at position {} (library has {} book(s))", index + 1, len),
                "Run `shelf list` to see positions.",
            ),
            ShelfError::Validation(message) | ShelfError::InvalidInput(message) => {
                CliError::InvalidInput(message)
            }
            ShelfError::Storage(message) => CliError::Storage {
                message,
                hint: None,
            },
        }
    }
}

/// Exit code for any error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<ShelfError>() {
        return match core_err {
            ShelfError::OutOfRange { .. } => exit_codes::NOT_FOUND,
            ShelfError::Validation(_) | ShelfError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            ShelfError::Storage(_) => exit_codes::STORAGE_FAILED,
        };
    }
    exit_codes::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_shown_one_based() {
        let err: CliError = ShelfError::OutOfRange { index: 4, len: 2 }.into();
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.to_string().starts_with("No book at position 5"));
    }

    #[test]
    fn test_exit_code_for_core_errors() {
        let err = anyhow::Error::new(ShelfError::Validation("Title cannot be empty".into()));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(ShelfError::Storage("disk full".into()));
        assert_eq!(exit_code_for(&err), exit_codes::STORAGE_FAILED);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), exit_codes::FAILURE);
    }
}
