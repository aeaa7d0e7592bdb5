//! Composite card identifier, e.g. `alice/forest-ranger`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a card path string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardPathError {
    /// The path is empty.
    #[error("card path must not be empty")]
    Empty,
    /// The path does not contain an author segment before a `/`.
    #[error("card path must be in the form 'author/card-slug'")]
    MissingSlash,
}

/// A validated catalog card path in the form `author/card-slug`.
///
/// The path doubles as the card's identity and its download key; the author
/// is derived from it rather than carried as a separate field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardPath(String);

impl CardPath {
    /// Parse a card path from a string in the form `author/card-slug`.
    ///
    /// # Errors
    ///
    /// Returns [`CardPathError`] if the string is empty or has no non-empty
    /// author segment before a `/`.
    pub fn parse(input: &str) -> Result<Self, CardPathError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CardPathError::Empty);
        }
        match input.split_once('/') {
            Some((author, slug)) if !author.is_empty() && !slug.is_empty() => {
                Ok(Self(input.to_owned()))
            }
            _ => Err(CardPathError::MissingSlash),
        }
    }

    /// The author segment (everything before the first `/`).
    #[must_use]
    pub fn author(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// The card slug (everything after the first `/`).
    #[must_use]
    pub fn slug(&self) -> &str {
        self.0.split_once('/').map_or("", |(_, slug)| slug)
    }

    /// Return the full path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
