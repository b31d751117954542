//! Orchestrates the per-repository download pipeline.

use crate::github::{GitHubClient, RepoHost};
use crate::license::{self, LicenseDecision};
use crate::repos::{RepoParseError, RepoRef};
use crate::storage::save_readme;
use crate::summary::{ProcessingResult, RunSummary, SkipReason};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Branch assumed when the metadata does not name a default branch.
const FALLBACK_BRANCH: &str = "master";

/// Configuration for a download run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository entries in `owner/repo` format, processed in order.
    repos: Vec<String>,
    /// Directory accepted README files are written to.
    output_dir: PathBuf,
    /// Optional GitHub token sent on both endpoints.
    token: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(repos: Vec<String>, output_dir: PathBuf, token: Option<String>) -> Self {
        Self {
            repos,
            output_dir,
            token,
        }
    }

    /// Returns the configured repository entries.
    pub fn repos(&self) -> &[String] {
        &self.repos
    }

    /// Returns the output directory path.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the configured GitHub token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Errors that can occur while setting up a run.
///
/// Per-repository failures never surface here; they are logged and recorded
/// in the [`RunSummary`] instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// HTTP client initialization errors.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Drives the fetch → license gate → README download → persist pipeline.
pub struct Runner<H = GitHubClient> {
    config: RunnerConfig,
    host: H,
}

impl Runner<GitHubClient> {
    /// Builds a runner against the public GitHub hosts.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let host = GitHubClient::new(config.token.clone())?;
        Ok(Self { config, host })
    }
}

impl<H: RepoHost> Runner<H> {
    /// Builds a runner against any [`RepoHost`] implementation.
    pub fn with_host(config: RunnerConfig, host: H) -> Self {
        Self { config, host }
    }

    /// Processes every configured repository strictly in input order.
    ///
    /// Each entry's pipeline runs to completion or short-circuits before the
    /// next entry starts. Every failure mode is isolated to its repository;
    /// `run` itself cannot fail.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::new();

        if self.config.repos.is_empty() {
            warn!("No repositories configured");
            return summary;
        }

        info!(
            count = self.config.repos.len(),
            output_dir = %self.config.output_dir.display(),
            "Starting README.md download run"
        );

        for entry in &self.config.repos {
            let result = process_entry(&self.host, entry, &self.config.output_dir).await;
            summary.record(&result);
        }

        info!(
            saved = summary.saved,
            skipped = summary.skipped,
            failed = summary.failed,
            "README.md download run complete"
        );
        summary
    }
}

/// Runs the four-stage pipeline for a single configured entry.
async fn process_entry<H: RepoHost>(
    host: &H,
    entry: &str,
    output_dir: &Path,
) -> ProcessingResult {
    let repo = match RepoRef::parse(entry) {
        Ok(repo) => repo,
        Err(RepoParseError::Empty) => {
            warn!("Encountered empty repository entry, skipping");
            return ProcessingResult::Skipped {
                repository: String::new(),
                reason: SkipReason::EmptyEntry,
            };
        }
        Err(e) => {
            error!(entry = entry.trim(), error = %e, "Invalid repository entry, skipping");
            return ProcessingResult::Skipped {
                repository: entry.trim().to_string(),
                reason: SkipReason::MalformedEntry,
            };
        }
    };

    let full_name = repo.full_name();
    debug!(repo = %full_name, "Processing repository");

    let metadata = match host.repo_metadata(&repo).await {
        Ok(metadata) => metadata,
        Err(e) => {
            error!(repo = %full_name, error = %e, "Failed to fetch repository metadata, skipping");
            return ProcessingResult::Skipped {
                repository: full_name,
                reason: SkipReason::MetadataUnavailable,
            };
        }
    };

    match license::evaluate(&metadata) {
        LicenseDecision::Allowed { name } => {
            debug!(repo = %full_name, license = %name, "License accepted");
        }
        LicenseDecision::Missing => {
            warn!(repo = %full_name, "Repository has no license, skipping");
            return ProcessingResult::Skipped {
                repository: full_name,
                reason: SkipReason::MissingLicense,
            };
        }
        LicenseDecision::Denied { name } => {
            warn!(repo = %full_name, license = %name, "License not allowed, skipping");
            return ProcessingResult::Skipped {
                repository: full_name,
                reason: SkipReason::LicenseDenied(name),
            };
        }
    }

    let branch = metadata
        .get("default_branch")
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_BRANCH);

    let readme = match host.readme(&repo, branch).await {
        Ok(content) => content,
        Err(e) => {
            error!(
                repo = %full_name,
                branch,
                error = %e,
                "Failed to download README.md, skipping"
            );
            return ProcessingResult::Skipped {
                repository: full_name,
                reason: SkipReason::ReadmeUnavailable,
            };
        }
    };

    match save_readme(&readme, &repo.name, output_dir) {
        Ok(path) => {
            info!(repo = %full_name, path = %path.display(), "README.md saved");
            ProcessingResult::Saved {
                repository: full_name,
                path,
            }
        }
        Err(e) => {
            error!(repo = %full_name, error = %e, "Failed to save README.md");
            ProcessingResult::Failed {
                repository: full_name,
                error: e.to_string(),
            }
        }
    }
}
