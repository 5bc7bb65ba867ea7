//! Markdown hyperlink construction for repositories, issues, and PRs.
//!
//! The events feed hands out identifiers in several shapes: bare
//! `owner/name` paths, API URLs (`https://api.github.com/repos/...`), and
//! full web URLs. Everything funnels through here so the rendered timeline
//! links consistently to the canonical web host.

use crate::types::RawEvent;

/// The canonical web origin links point at.
pub const URL_PREFIX: &str = "https://github.com";

/// Builds the `[#N](...)` link for the issue or PR an event refers to.
///
/// The issue form wins when both sub-payloads are present (issue-comment
/// events carry an `issue` even when the comment is on a PR, matching where
/// the conversation lives). Returns `None` when the payload carries neither,
/// which the pipeline treats as an unrenderable event.
pub fn reference_link(event: &RawEvent) -> Option<String> {
    if let Some(issue) = &event.payload.issue {
        return Some(format!(
            "[#{number}]({URL_PREFIX}/{repo}/issues/{number})",
            number = issue.number,
            repo = event.repo.name,
        ));
    }

    let pr = event.payload.pull_request.as_ref()?;
    Some(format!(
        "[#{number}]({URL_PREFIX}/{repo}/pull/{number})",
        number = pr.number,
        repo = event.repo.name,
    ))
}

/// Builds a `[display](url)` link from a raw identifier or URL string.
///
/// The target is canonicalized first (see [`canonical_web_url`]); the display
/// text defaults to the final path segment, i.e. the repository's short name.
pub fn url_link(target: &str, display: Option<&str>) -> String {
    let url = canonical_web_url(target);
    let display = match display {
        Some(name) => name.to_string(),
        None => url.rsplit('/').next().unwrap_or(&url).to_string(),
    };
    format!("[{display}]({url})")
}

/// Canonicalizes a repository identifier or URL to the web host form.
///
/// - `https://api.github.com/repos/owner/name` becomes
///   `https://github.com/owner/name` (the API host and its first path
///   segment collapse into the web host)
/// - `github.com/owner/name` gains an `https://` scheme
/// - a bare `owner/name` path gains the full web origin
fn canonical_web_url(target: &str) -> String {
    let target = normalize_api_host(target);

    if target.starts_with(URL_PREFIX) {
        target
    } else if target.starts_with("github.com") {
        format!("https://{target}")
    } else {
        format!("{URL_PREFIX}/{target}")
    }
}

/// Rewrites `api.github.com/<segment>/rest` to `github.com/rest`, preserving
/// whatever precedes the API host (typically the scheme).
fn normalize_api_host(target: &str) -> String {
    const API_HOST: &str = "api.github.com/";

    if let Some(start) = target.find(API_HOST) {
        let rest = &target[start + API_HOST.len()..];
        if let Some(slash) = rest.find('/') {
            return format!("{}github.com/{}", &target[..start], &rest[slash + 1..]);
        }
    }
    target.to_string()
}
