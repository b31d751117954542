//! GitHub metadata and README fetchers.
//!
//! Two GET endpoints are used per repository: the repository metadata
//! endpoint on the API host, and the raw-content host for the default
//! branch's `README.md`. Both operations sit behind the [`RepoHost`] trait
//! so the pipeline can be driven by an in-memory double in tests.

mod error;

pub use error::FetchError;

use crate::repos::RepoRef;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default GitHub API host.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default raw-content host.
const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Timeout applied to every request on the shared client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The network operations the pipeline needs from a repository host.
#[async_trait]
pub trait RepoHost {
    /// Fetches the repository metadata document.
    ///
    /// The document is kept untyped; only `license.name` and
    /// `default_branch` are ever consulted.
    async fn repo_metadata(&self, repo: &RepoRef) -> Result<Value, FetchError>;

    /// Fetches the raw `README.md` content from the given branch.
    async fn readme(&self, repo: &RepoRef, branch: &str) -> Result<String, FetchError>;
}

/// [`RepoHost`] implementation backed by the GitHub HTTP endpoints.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
    raw_base: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a client against the public GitHub hosts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: Option<String>) -> Result<Self, reqwest::Error> {
        Self::with_base_urls(token, DEFAULT_API_BASE, DEFAULT_RAW_BASE)
    }

    /// Creates a client against custom API and raw-content hosts.
    pub fn with_base_urls(
        token: Option<String>,
        api_base: impl Into<String>,
        raw_base: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into(),
            raw_base: raw_base.into(),
            token,
        })
    }

    fn metadata_url(&self, repo: &RepoRef) -> String {
        format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.name)
    }

    fn readme_url(&self, repo: &RepoRef, branch: &str) -> String {
        format!(
            "{}/{}/{}/{}/README.md",
            self.raw_base, repo.owner, repo.name, branch
        )
    }

    /// Issues a GET and resolves anything but HTTP 200 to [`FetchError`].
    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl RepoHost for GitHubClient {
    async fn repo_metadata(&self, repo: &RepoRef) -> Result<Value, FetchError> {
        let url = self.metadata_url(repo);
        debug!(url = %url, "Fetching repository metadata");

        let response = self.get(&url).await?;
        response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Transport { url, source })
    }

    async fn readme(&self, repo: &RepoRef, branch: &str) -> Result<String, FetchError> {
        let url = self.readme_url(repo, branch);
        debug!(url = %url, "Downloading README.md");

        let response = self.get(&url).await?;
        response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GitHubClient {
        GitHubClient::with_base_urls(None, "https://api.example.com", "https://raw.example.com")
            .unwrap()
    }

    fn repo() -> RepoRef {
        RepoRef {
            owner: "octocat".to_string(),
            name: "Hello-World".to_string(),
        }
    }

    #[test]
    fn builds_metadata_url() {
        let client = test_client();
        assert_eq!(
            client.metadata_url(&repo()),
            "https://api.example.com/repos/octocat/Hello-World"
        );
    }

    #[test]
    fn builds_readme_url() {
        let client = test_client();
        assert_eq!(
            client.readme_url(&repo(), "master"),
            "https://raw.example.com/octocat/Hello-World/master/README.md"
        );
    }
}
