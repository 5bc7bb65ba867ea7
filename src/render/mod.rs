//! Rendering of activity events into timeline lines.
//!
//! Each supported [`EventKind`] maps to one pure rendering function producing
//! one markdown line: emoji marker, verb, entity link. The match in
//! [`render_line`] is the closed registry of supported kinds; the pipeline
//! drops anything that renders to `None`.

pub mod link;

use crate::types::{EventKind, RawEvent};

use link::{reference_link, url_link};

/// Renders one event to its timeline line.
///
/// Returns `None` for unsupported kinds and for events whose payload is
/// missing a field their kind should guarantee (a malformed feed entry is
/// dropped, not a panic).
pub fn render_line(event: &RawEvent) -> Option<String> {
    match event.kind {
        EventKind::IssueComment => render_issue_comment(event),
        EventKind::Issues => render_issue(event),
        EventKind::PullRequest => render_pull_request(event),
        EventKind::Push => Some(render_push(event)),
        EventKind::Fork => render_fork(event),
        EventKind::Watch => Some(format!("⭐️ Starred {}", url_link(&event.repo.url, None))),
        EventKind::Public => Some(format!("🎉 Open sourced {}", url_link(&event.repo.url, None))),
        EventKind::Create => Some(format!("🎉 Created {}", url_link(&event.repo.url, None))),
        EventKind::Unsupported => None,
    }
}

fn render_issue_comment(event: &RawEvent) -> Option<String> {
    Some(format!(
        "🗣 Commented on {} in {}",
        reference_link(event)?,
        url_link(&event.repo.name, None)
    ))
}

fn render_issue(event: &RawEvent) -> Option<String> {
    let action = event.payload.action.as_deref()?;
    Some(format!(
        "❗️ {} issue {} in {}",
        capitalize(action),
        reference_link(event)?,
        url_link(&event.repo.name, None)
    ))
}

fn render_pull_request(event: &RawEvent) -> Option<String> {
    let pr = event.payload.pull_request.as_ref()?;
    let action = event.payload.action.as_deref()?;

    let verb = if pr.merged {
        "🎉 Merged".to_string()
    } else {
        let emoji = if action == "opened" { "💪" } else { "❌" };
        format!("{} {}", emoji, capitalize(action))
    };

    Some(format!(
        "{} PR {} in {}",
        verb,
        reference_link(event)?,
        url_link(&event.repo.name, None)
    ))
}

fn render_push(event: &RawEvent) -> String {
    let repo = url_link(&event.repo.url, None);
    let commit_count = event.payload.commits.as_deref().map_or(0, <[_]>::len);

    if commit_count == 1 {
        format!("📦 Pushed to {repo}")
    } else {
        format!("📦 Pushed {commit_count} commits to {repo}")
    }
}

fn render_fork(event: &RawEvent) -> Option<String> {
    let forkee = event.payload.forkee.as_ref()?;
    Some(format!(
        "🍴 Forked {} to {}",
        url_link(&event.repo.url, None),
        url_link(&forkee.html_url, None)
    ))
}

/// Upper-cases the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
