//! Shared primitives for all Rust crates in the Utilisateur service.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Utilisateur crates.
pub type AppResult<T> = Result<T, AppError>;

/// A UTF-8 string that is not empty.
///
/// Only the zero-length string is rejected. Whitespace counts as content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::Validation("value must not be empty".to_owned()));
        }

        Ok(Self(value))
    }

    /// Returns `Some` when the optional value is present and non-empty.
    #[must_use]
    pub fn from_optional(value: Option<String>) -> Option<Self> {
        value.and_then(|value| Self::new(value).ok())
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the message carried by the error, without its category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::NotFound(message) | Self::Internal(message) => {
                message.as_str()
            }
        }
    }
}
