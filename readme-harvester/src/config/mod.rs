//! Settings and repository list loading.
//!
//! Settings come from the process environment; CLI flags override them at
//! the composition root. The repository list can be supplied inline or
//! loaded from a plain text file with one `owner/repo` entry per line.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the default output directory.
const OUTPUT_DIR_VAR: &str = "OUTPUT_DIR";

/// Default output directory when nothing else is configured.
const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment-derived settings.
///
/// Constructed once at startup and passed by reference; there is no ambient
/// global settings state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory accepted README files are written to.
    pub output_dir: PathBuf,
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// `OUTPUT_DIR` overrides the default of `output`.
    #[must_use]
    pub fn from_env() -> Self {
        let output_dir = std::env::var(OUTPUT_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));
        debug!(output_dir = %output_dir.display(), "Loaded settings from environment");
        Self { output_dir }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Loads a repository list from a text file.
///
/// One `owner/repo` entry per line; blank lines and lines starting with `#`
/// are skipped. Entries are returned as raw strings — validation happens in
/// the pipeline so a malformed line skips that entry, not the whole file.
///
/// # Errors
///
/// Returns [`ConfigError::IoError`] if the file cannot be read.
pub fn load_repo_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    let repos: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    info!(path = %path.display(), count = repos.len(), "Loaded repository list");
    Ok(repos)
}
