//! The GitHub event source.
//!
//! The rest of the crate consumes events through the [`EventSource`]
//! capability trait; the production implementation is an octocrab-backed
//! client scoped to one username. Fetch failures are terminal for the run:
//! there is no retry layer, and a failed fetch aborts before any document
//! mutation.

pub mod client;
pub mod error;

use std::future::Future;

use crate::types::RawEvent;

pub use client::EventsClient;
pub use error::FetchError;

/// Capability for listing an account's recent public events.
///
/// Implementations return the first page only, most-recent-first, already
/// deserialized.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct FeedSource {
///     events: Vec<RawEvent>,
/// }
///
/// impl EventSource for FeedSource {
///     async fn list_events(&self, _page_size: u8) -> Result<Vec<RawEvent>, FetchError> {
///         Ok(self.events.clone())
///     }
/// }
/// ```
pub trait EventSource {
    /// Fetches up to `page_size` recent public events.
    fn list_events(
        &self,
        page_size: u8,
    ) -> impl Future<Output = Result<Vec<RawEvent>, FetchError>> + Send;
}
