//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching from the repository host.
///
/// A confirmed-absent file (HTTP 404) and a transport failure are kept as
/// separate variants for log output, but the pipeline treats both as a
/// terminal skip for the affected repository.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (connection, timeout, decode).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The host answered with a non-200 status.
    #[error("GET {url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
}
