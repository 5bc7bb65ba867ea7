//! Octocrab client wrapper scoped to a specific user.
//!
//! This module provides `EventsClient`, which wraps an `Octocrab` instance
//! and scopes all operations to one account's public events feed.

use octocrab::Octocrab;
use serde::Serialize;

use crate::types::RawEvent;

use super::{EventSource, FetchError};

#[derive(Serialize)]
struct EventsQuery {
    per_page: u8,
}

/// A GitHub API client scoped to one username.
#[derive(Clone)]
pub struct EventsClient {
    /// The underlying octocrab client.
    client: Octocrab,

    /// The account this client is scoped to.
    username: String,
}

impl EventsClient {
    /// Creates a new client scoped to the given username.
    ///
    /// Use this when you need a pre-configured Octocrab instance (custom
    /// auth, base URL overrides in tests, ...).
    pub fn new(client: Octocrab, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }

    /// Creates a client from a personal access token.
    pub fn from_token(
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, octocrab::Error> {
        let client = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(client, username))
    }

    /// Returns the account this client is scoped to.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl EventSource for EventsClient {
    async fn list_events(&self, page_size: u8) -> Result<Vec<RawEvent>, FetchError> {
        let route = format!("/users/{}/events/public", self.username);

        self.client
            .get(route, Some(&EventsQuery { per_page: page_size }))
            .await
            .map_err(|source| FetchError {
                username: self.username.clone(),
                source,
            })
    }
}

impl std::fmt::Debug for EventsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventsClient")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
