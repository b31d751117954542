//! Repository references.
//!
//! A repository is configured as a single `owner/repo` string; this module
//! parses those strings and derives the output filename for a repository.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when parsing an `owner/repo` string.
#[derive(Debug, Error)]
pub enum RepoParseError {
    /// The entry was empty after trimming.
    #[error("empty repository entry")]
    Empty,

    /// The entry did not split into exactly two non-empty parts.
    #[error("invalid repository format '{input}', expected 'owner/repo'")]
    Malformed { input: String },
}

/// A reference to a single GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Parses an `owner/repo` string into a reference.
    ///
    /// The input is trimmed first. Exactly one `/` separating two non-empty
    /// components is required; anything else is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`RepoParseError`] for empty or malformed entries.
    pub fn parse(input: &str) -> Result<Self, RepoParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RepoParseError::Empty);
        }

        let mut parts = trimmed.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(RepoParseError::Malformed {
                input: trimmed.to_string(),
            }),
        }
    }

    /// Full repository name in `owner/name` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
