//! The event-to-text pipeline.
//!
//! Composes normalization, filtering, rendering, and deduplication into the
//! final ordered line list. Result ordering is most-recent-activity-first
//! throughout, mirroring the feed.

use crate::config::Config;
use crate::render::render_line;
use crate::types::RawEvent;

use super::normalize::merge_push_events;

/// Turns the raw event feed into the final (unnumbered) timeline lines.
///
/// Stages, in order: normalize adjacent pushes, drop kinds without a
/// renderer, drop kinds outside the allow-list, truncate to
/// `10 * max_lines` events (a cheap pre-cap bounding the rendering and
/// dedup work), render, drop blanks and duplicates (first occurrence wins),
/// truncate to `max_lines`.
pub fn render_timeline(events: Vec<RawEvent>, config: &Config) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(config.max_lines);

    let eligible = merge_push_events(events)
        .into_iter()
        .filter(|event| event.kind.is_renderable())
        .filter(|event| config.allows(event.kind))
        .take(10 * config.max_lines);

    for event in eligible {
        let Some(line) = render_line(&event) else {
            continue;
        };
        if line.is_empty() || lines.contains(&line) {
            continue;
        }
        lines.push(line);
        if lines.len() == config.max_lines {
            break;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommitRef, EventKind, EventPayload, EventRepo, IssueRef, RepoId};

    fn config(max_lines: usize, event_types: &[&str]) -> Config {
        Config {
            username: "octocat".to_string(),
            commit_message: "sync".to_string(),
            max_lines,
            event_types: event_types.iter().map(|t| t.to_ascii_lowercase()).collect(),
        }
    }

    fn event(kind: EventKind, repo_id: u64, payload: EventPayload) -> RawEvent {
        RawEvent {
            kind,
            repo: EventRepo {
                id: RepoId(repo_id),
                name: format!("octocat/repo-{repo_id}"),
                url: format!("https://api.github.com/repos/octocat/repo-{repo_id}"),
            },
            payload,
            created_at: None,
        }
    }

    fn star(repo_id: u64) -> RawEvent {
        event(EventKind::Watch, repo_id, EventPayload::default())
    }

    fn push(repo_id: u64, commit_count: usize) -> RawEvent {
        event(
            EventKind::Push,
            repo_id,
            EventPayload {
                commits: Some(vec![
                    CommitRef {
                        sha: String::new(),
                        message: String::new(),
                    };
                    commit_count
                ]),
                ..EventPayload::default()
            },
        )
    }

    #[test]
    fn output_is_capped_at_max_lines() {
        let events: Vec<RawEvent> = (0..20).map(star).collect();
        let lines = render_timeline(events, &config(3, &["WatchEvent"]));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn unsupported_kinds_are_dropped() {
        let events = vec![
            event(EventKind::Unsupported, 1, EventPayload::default()),
            star(2),
        ];
        let lines = render_timeline(events, &config(5, &["WatchEvent", "GollumEvent"]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Starred"));
    }

    #[test]
    fn allow_list_is_case_insensitive() {
        let events = vec![star(1), push(2, 1)];
        let lines = render_timeline(events, &config(5, &["watchevent"]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Starred"));
    }

    #[test]
    fn duplicate_lines_keep_first_occurrence_order() {
        // Two stars of the same repo render identically; the duplicate must
        // vanish without disturbing surrounding order.
        let events = vec![star(1), star(2), star(1), star(3)];
        let lines = render_timeline(events, &config(5, &["WatchEvent"]));

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("repo-1"));
        assert!(lines[1].contains("repo-2"));
        assert!(lines[2].contains("repo-3"));
    }

    #[test]
    fn unrenderable_payloads_do_not_consume_slots() {
        // An issue event with no issue reference renders to None; the later
        // events must still fill the output.
        let events = vec![
            event(
                EventKind::Issues,
                1,
                EventPayload {
                    action: Some("opened".to_string()),
                    ..EventPayload::default()
                },
            ),
            star(2),
            star(3),
        ];
        let lines = render_timeline(events, &config(2, &["IssuesEvent", "WatchEvent"]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("repo-2"));
        assert!(lines[1].contains("repo-3"));
    }

    #[test]
    fn adjacent_pushes_collapse_before_filtering() {
        let events = vec![push(1, 2), push(1, 3)];
        let lines = render_timeline(events, &config(5, &["PushEvent"]));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Pushed 5 commits"));
    }

    #[test]
    fn mixed_feed_respects_allow_list_and_order() {
        let events = vec![
            push(1, 1),
            star(2),
            event(
                EventKind::Issues,
                3,
                EventPayload {
                    action: Some("closed".to_string()),
                    issue: Some(IssueRef { number: 5 }),
                    ..EventPayload::default()
                },
            ),
        ];
        let lines = render_timeline(events, &config(5, &["PushEvent", "IssuesEvent"]));

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Pushed"));
        assert!(lines[1].contains("Closed issue"));
    }

    #[test]
    fn empty_feed_yields_no_lines() {
        assert!(render_timeline(Vec::new(), &config(5, &["PushEvent"])).is_empty());
    }
}
