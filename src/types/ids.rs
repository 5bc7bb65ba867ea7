//! Newtype wrappers for domain identifiers.

use serde::Deserialize;
use std::fmt;

/// GitHub's numeric repository identifier.
///
/// The events feed carries it on every event; the normalizer compares it to
/// decide whether two adjacent push events target the same repository (the
/// `owner/name` string can change when a repository is renamed, the numeric
/// id cannot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RepoId(pub u64);

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RepoId {
    fn from(n: u64) -> Self {
        RepoId(n)
    }
}
