//! Push-event normalization.
//!
//! A burst of pushes to one repository arrives as several adjacent
//! `PushEvent`s; rendered individually they would flood the timeline with
//! near-identical lines. This pass collapses every maximal run of adjacent
//! pushes targeting the same repository into a single push carrying the
//! concatenated commit list.

use crate::types::{EventKind, RawEvent};

/// Collapses adjacent same-repository push events.
///
/// One left-to-right pass with no backtracking: each event is compared
/// against the most recently kept one, so a freshly merged push keeps
/// absorbing neighbors until the run ends. Commit order within the merged
/// list follows the original event order. Non-push events and isolated
/// pushes pass through unchanged; overall order is preserved.
pub fn merge_push_events(events: Vec<RawEvent>) -> Vec<RawEvent> {
    let mut merged: Vec<RawEvent> = Vec::with_capacity(events.len());

    for event in events {
        if let Some(last) = merged.last_mut()
            && last.kind == EventKind::Push
            && event.kind == EventKind::Push
            && last.repo.id == event.repo.id
        {
            last.payload
                .commits
                .get_or_insert_with(Vec::new)
                .extend(event.payload.commits.unwrap_or_default());
            continue;
        }
        merged.push(event);
    }

    merged
}
