#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod license;
pub mod repos;
pub mod runner;
pub mod storage;
pub mod summary;

pub use config::{load_repo_list, ConfigError, Settings};
pub use github::{FetchError, GitHubClient, RepoHost};
pub use license::{LicenseDecision, ALLOWED_LICENSES};
pub use repos::{RepoParseError, RepoRef};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use storage::{save_readme, StorageError};
pub use summary::{ProcessingResult, RunSummary, SkipReason};
