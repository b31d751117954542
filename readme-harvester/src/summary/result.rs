//! Processing result types.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a repository was skipped without an error being recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The configured entry was blank after trimming.
    EmptyEntry,

    /// The entry did not parse as `owner/repo`.
    MalformedEntry,

    /// Repository metadata could not be fetched.
    MetadataUnavailable,

    /// The metadata carries no license.
    MissingLicense,

    /// The license is not on the allow-list.
    LicenseDenied(String),

    /// The README could not be downloaded.
    ReadmeUnavailable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntry => write!(f, "empty entry"),
            Self::MalformedEntry => write!(f, "malformed entry"),
            Self::MetadataUnavailable => write!(f, "metadata unavailable"),
            Self::MissingLicense => write!(f, "no license"),
            Self::LicenseDenied(name) => write!(f, "license '{name}' not allowed"),
            Self::ReadmeUnavailable => write!(f, "README unavailable"),
        }
    }
}

/// Result of processing a single repository entry.
#[derive(Debug, Clone, Serialize)]
pub enum ProcessingResult {
    /// The README was fetched and written to disk.
    Saved {
        /// Repository full name.
        repository: String,
        /// Path of the written file.
        path: PathBuf,
    },

    /// The repository was skipped by a pipeline stage.
    Skipped {
        /// Repository entry as configured.
        repository: String,
        /// Reason for skipping.
        reason: SkipReason,
    },

    /// The write to disk failed.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}
