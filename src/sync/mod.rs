//! The end-to-end synchronization run.
//!
//! One run is a strictly sequential pipeline: fetch the event feed, shape it
//! into timeline lines, read the document, merge the managed region, write
//! the document back, commit and push. There is no retry and no cross-run
//! state; every stage's failure is terminal and distinguishable, so a caller
//! can tell "nothing to do" from "broken".


use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::document::region::{RegionError, RegionMerge, merge_region};
use crate::document::{DocumentStore, START_MARKER};
use crate::events::render_timeline;
use crate::git::{GitError, Persister, PersistOutcome};
use crate::github::{EventSource, FetchError};

/// Events requested from the feed; one page, no pagination beyond it.
const EVENTS_PAGE_SIZE: u8 = 100;

/// Below this many timeline lines the run logs a hint, matching the bot's
/// expectation of a reasonably active account.
const FEW_ACTIVITIES: usize = 5;

/// Terminal outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The managed region changed and the document was persisted.
    Updated,

    /// The region already matched the feed; nothing was written.
    NoChanges,
}

/// Terminal failure of a run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The event fetch failed; the document was never touched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The document has no recognizable start marker.
    #[error("could not find the `{START_MARKER}` marker in {}", .path.display())]
    MissingStartMarker { path: PathBuf },

    /// The pipeline produced zero renderable lines.
    #[error("no qualifying activity found for {username}")]
    NoContent { username: String },

    /// Reading or writing the document failed.
    #[error("failed to access {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The commit/push collaborator failed. The document has already been
    /// written to storage; only the remote sync is missing.
    #[error("failed to persist the updated document: {source}")]
    Persist {
        #[source]
        source: GitError,
    },
}

/// Runs one full synchronization cycle against `path`.
///
/// Side-effect ordering: the document write always precedes the persist
/// call, and nothing is written unless the region merge produced a change.
pub async fn run(
    source: &impl EventSource,
    store: &impl DocumentStore,
    persister: &impl Persister,
    config: &Config,
    path: &Path,
) -> Result<SyncOutcome, SyncError> {
    tracing::debug!(username = %config.username, "fetching public events");
    let events = source.list_events(EVENTS_PAGE_SIZE).await?;
    tracing::debug!(username = %config.username, count = events.len(), "events fetched");

    if let Some(newest) = events.first().and_then(|event| event.created_at) {
        tracing::debug!(%newest, "most recent event");
    }

    let lines = render_timeline(events, config);
    if lines.len() < FEW_ACTIVITIES {
        tracing::info!(count = lines.len(), "found fewer than {FEW_ACTIVITIES} qualifying activities");
    }

    let document = store.read_lines(path).map_err(|source| SyncError::Document {
        path: path.to_owned(),
        source,
    })?;

    let merged = merge_region(&document, &lines).map_err(|err| match err {
        RegionError::MissingStartMarker => SyncError::MissingStartMarker {
            path: path.to_owned(),
        },
        RegionError::NoContent => SyncError::NoContent {
            username: config.username.clone(),
        },
    })?;

    let updated = match merged {
        RegionMerge::NoChanges => {
            tracing::info!("no changes detected");
            return Ok(SyncOutcome::NoChanges);
        }
        RegionMerge::Updated(updated) => updated,
    };

    store
        .write_lines(path, &updated)
        .map_err(|source| SyncError::Document {
            path: path.to_owned(),
            source,
        })?;

    match persister
        .persist(&config.commit_message)
        .map_err(|source| SyncError::Persist { source })?
    {
        PersistOutcome::Committed => {
            tracing::info!(path = %path.display(), "updated document pushed to remote");
        }
        PersistOutcome::NothingToCommit => {
            tracing::info!(path = %path.display(), "working tree already up to date; nothing committed");
        }
    }

    Ok(SyncOutcome::Updated)
}
