//! Shared primitives for all Rust crates in Orakel.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across Orakel crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
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
///
/// Discovery, fetch, mapping and conversion failures are fatal to the report
/// being built. Cache fetch and decode failures only ever concern one
/// recording and are absorbed by the enrichment layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cluster API discovery could not be reached.
    #[error("discovery error: {0}")]
    Discovery(String),

    /// Discovery succeeded but no resource matches the requested kind.
    #[error("no mapping found for resource: {0}")]
    NoMapping(String),

    /// Listing resources from the cluster failed.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// A loosely-typed object could not be converted into its record shape.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// The key-value store could not be reached or answered with an error.
    #[error("cache fetch error: {0}")]
    CacheFetch(String),

    /// A stored payload could not be parsed.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns whether the error must abort the current report request.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::CacheFetch(_) | Self::Decode(_))
    }
}
