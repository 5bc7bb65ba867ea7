//! GitHub API error types.

use thiserror::Error;

/// Error fetching the public events feed.
///
/// Carries the username so the terminal report names the account that
/// failed, not just the transport error.
#[derive(Debug, Error)]
#[error("failed to fetch events for {username}: {source}")]
pub struct FetchError {
    /// The account whose feed was requested.
    pub username: String,

    /// The underlying octocrab error.
    #[source]
    pub source: octocrab::Error,
}
