//! The region merge engine.
//!
//! Reconciles the managed region of a document with freshly rendered
//! timeline lines. The document may be never-touched (start marker only),
//! previously generated (both markers), or hand-edited, and each state has
//! one recovery path:
//!
//! - no start marker: fatal, the document is left alone
//! - no rendered lines: fatal, the document is left alone
//! - start marker but no end marker: bootstrap. Numbered lines are inserted
//!   after the start marker, followed by a new end marker
//! - both markers, identical content (after trimming): no-op
//! - both markers, empty region: numbered lines are inserted directly
//! - both markers, existing content: line-preserving overwrite (see
//!   [`reconcile`])
//!
//! The merge is an index-based two-pointer pass over immutable slices that
//! produces a new line vector; the input document is never mutated.

use thiserror::Error;

use super::{END_MARKER, START_MARKER};

/// Outcome of a region merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionMerge {
    /// The document changed; the full updated line list.
    Updated(Vec<String>),

    /// The region already holds exactly this content.
    NoChanges,
}

/// Errors from the region merge engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// The document has no recognizable start marker.
    #[error("could not find the `{START_MARKER}` marker in the document")]
    MissingStartMarker,

    /// There are no rendered lines to write.
    #[error("no activity lines to write into the document")]
    NoContent,
}

/// Merges `lines` into the managed region of `document`.
///
/// `lines` are the unnumbered timeline lines, most recent first; numbering
/// (`1. `, `2. `, ...) is applied here.
pub fn merge_region(document: &[String], lines: &[String]) -> Result<RegionMerge, RegionError> {
    let start = document
        .iter()
        .position(|line| line.trim() == START_MARKER)
        .ok_or(RegionError::MissingStartMarker)?;

    if lines.is_empty() {
        return Err(RegionError::NoContent);
    }

    // The document holds at most one of each marker, so searching after the
    // start marker is exhaustive and rules out an end-before-start slice.
    let end = document[start + 1..]
        .iter()
        .position(|line| line.trim() == END_MARKER)
        .map(|offset| start + 1 + offset);

    let Some(end) = end else {
        // Bootstrap: the region has never been generated. Insert the
        // numbered lines right after the start marker and close the region.
        let mut updated = document[..=start].to_vec();
        updated.extend(numbered(lines));
        updated.push(END_MARKER.to_string());
        updated.extend_from_slice(&document[start + 1..]);
        return Ok(RegionMerge::Updated(updated));
    };

    let existing = &document[start + 1..end];
    let rendered: Vec<String> = numbered(lines).collect();

    if existing.join("\n").trim() == rendered.join("\n").trim() {
        return Ok(RegionMerge::NoChanges);
    }

    let region = if existing.is_empty() {
        rendered
    } else {
        reconcile(existing, lines)
    };

    let mut updated = document[..=start].to_vec();
    updated.extend(region);
    updated.extend_from_slice(&document[end..]);
    Ok(RegionMerge::Updated(updated))
}

/// Line-preserving overwrite of a non-empty region.
///
/// Two pointers walk the existing region and the new lines: every non-blank
/// existing line is overwritten with the next unconsumed numbered new line;
/// blank existing lines are kept verbatim without consuming a new line
/// (external formatters like to insert a blank right after the start
/// marker). Once the new lines run out, the remaining existing lines are
/// kept as-is, and new lines beyond the region's length are dropped.
fn reconcile(existing: &[String], lines: &[String]) -> Vec<String> {
    let mut region = Vec::with_capacity(existing.len());
    let mut next = 0;

    for line in existing {
        if !line.is_empty() && next < lines.len() {
            region.push(number(next, &lines[next]));
            next += 1;
        } else {
            region.push(line.clone());
        }
    }

    region
}

/// Numbers lines `1. <text>`, `2. <text>`, ...
fn numbered(lines: &[String]) -> impl Iterator<Item = String> + '_ {
    lines.iter().enumerate().map(|(idx, line)| number(idx, line))
}

fn number(idx: usize, line: &str) -> String {
    format!("{}. {}", idx + 1, line)
}
