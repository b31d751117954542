//! Persistence of accepted README files.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while writing a README to disk.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to create the output directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes README content to `<directory>/<sanitized repo name>.md`.
///
/// The directory is created if absent. The filename is the repository name
/// with `/` replaced by `_`; no other characters are escaped. An existing
/// file of the same name is overwritten unconditionally.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`StorageError`] if the directory cannot be created or the file
/// cannot be written. Callers treat this as a per-repository failure.
pub fn save_readme(
    content: &str,
    repo_name: &str,
    directory: &Path,
) -> Result<PathBuf, StorageError> {
    if !directory.exists() {
        std::fs::create_dir_all(directory).map_err(|source| StorageError::CreateDir {
            path: directory.display().to_string(),
            source,
        })?;
        debug!(directory = %directory.display(), "Created output directory");
    }

    let sanitized = repo_name.replace('/', "_");
    let file_path = directory.join(format!("{sanitized}.md"));

    std::fs::write(&file_path, content).map_err(|source| StorageError::Write {
        path: file_path.display().to_string(),
        source,
    })?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_content_verbatim() {
        let temp = TempDir::new().unwrap();

        let path = save_readme("# Hello\n", "Hello-World", temp.path()).unwrap();

        assert_eq!(path, temp.path().join("Hello-World.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Hello\n");
    }

    #[test]
    fn creates_missing_output_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("out/deeper");

        let path = save_readme("content", "repo", &nested).unwrap();

        assert!(path.exists());
        assert_eq!(path, nested.join("repo.md"));
    }

    #[test]
    fn sanitizes_path_separators_in_name() {
        let temp = TempDir::new().unwrap();

        let path = save_readme("content", "weird/name", temp.path()).unwrap();

        assert_eq!(path, temp.path().join("weird_name.md"));
    }

    #[test]
    fn overwrites_existing_file() {
        let temp = TempDir::new().unwrap();

        save_readme("first", "repo", temp.path()).unwrap();
        let path = save_readme("second", "repo", temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
