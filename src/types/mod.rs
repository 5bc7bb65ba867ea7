//! Core domain types for the activity bot.
//!
//! This module contains the typed representation of the GitHub public events
//! feed, designed so that unsupported event kinds are an exhaustively-checked
//! match arm rather than a runtime lookup miss.

pub mod event;
pub mod ids;

// Re-export commonly used types at the module level
pub use event::{
    CommitRef, EventKind, EventPayload, EventRepo, ForkTarget, IssueRef, PullRequestRef, RawEvent,
};
pub use ids::RepoId;
