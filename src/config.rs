//! Run configuration from GitHub-Actions-style inputs.
//!
//! Workflow inputs arrive as `INPUT_*` environment variables. The
//! configuration is read once per run and is immutable afterwards.

use thiserror::Error;

use crate::types::EventKind;

/// Environment variable carrying the account to fetch activity for.
pub const INPUT_USERNAME: &str = "INPUT_GH_USERNAME";

/// Environment variable carrying the commit message.
pub const INPUT_COMMIT_MSG: &str = "INPUT_COMMIT_MSG";

/// Environment variable carrying the maximum number of timeline lines.
pub const INPUT_MAX_LINES: &str = "INPUT_MAX_LINES";

/// Environment variable carrying the comma-separated event-kind allow-list.
pub const INPUT_EVENT_TYPES: &str = "INPUT_EVENT_TYPES";

const DEFAULT_COMMIT_MESSAGE: &str = "⚡️ Update README with the recent activity";
const DEFAULT_MAX_LINES: usize = 5;

/// All event kinds the renderer supports, in wire-format form.
const ALL_EVENT_TYPES: [&str; 8] = [
    "IssueCommentEvent",
    "IssuesEvent",
    "PullRequestEvent",
    "PushEvent",
    "ForkEvent",
    "WatchEvent",
    "PublicEvent",
    "CreateEvent",
];

/// Errors from reading the run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The required username input is absent or blank.
    #[error("missing required input `GH_USERNAME`")]
    MissingUsername,

    /// `MAX_LINES` did not parse as a positive integer.
    #[error("`MAX_LINES` must be a positive integer, got `{0}`")]
    InvalidMaxLines(String),
}

/// Immutable per-run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The account whose public events are fetched.
    pub username: String,

    /// Commit message used when persisting the updated document.
    pub commit_message: String,

    /// Upper bound on the number of timeline lines written.
    pub max_lines: usize,

    /// Allow-listed event kinds, trimmed and lowercased.
    pub event_types: Vec<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an injectable lookup.
    ///
    /// Factored out of [`Config::from_env`] so tests can supply inputs
    /// without mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let username = lookup(INPUT_USERNAME)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingUsername)?;

        let commit_message = lookup(INPUT_COMMIT_MSG)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string());

        let max_lines = match lookup(INPUT_MAX_LINES) {
            None => DEFAULT_MAX_LINES,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidMaxLines(raw))?,
        };

        let event_types = match lookup(INPUT_EVENT_TYPES) {
            None => ALL_EVENT_TYPES.iter().map(|t| t.to_ascii_lowercase()).collect(),
            Some(raw) => raw
                .split(',')
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        };

        Ok(Config {
            username,
            commit_message,
            max_lines,
            event_types,
        })
    }

    /// Returns true if the allow-list admits this event kind.
    pub fn allows(&self, kind: EventKind) -> bool {
        kind.as_api_str()
            .is_some_and(|name| self.event_types.iter().any(|t| t.eq_ignore_ascii_case(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[(INPUT_USERNAME, "octocat")])).unwrap();
        assert_eq!(config.username, "octocat");
        assert_eq!(config.commit_message, DEFAULT_COMMIT_MESSAGE);
        assert_eq!(config.max_lines, 5);
        assert_eq!(config.event_types.len(), ALL_EVENT_TYPES.len());
        assert!(config.allows(EventKind::Push));
        assert!(config.allows(EventKind::Watch));
    }

    #[test]
    fn username_required() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])).unwrap_err(),
            ConfigError::MissingUsername
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[(INPUT_USERNAME, "   ")])).unwrap_err(),
            ConfigError::MissingUsername
        );
    }

    #[test]
    fn max_lines_must_be_positive() {
        let parse = |raw: &str| {
            Config::from_lookup(lookup_from(&[(INPUT_USERNAME, "octocat"), (INPUT_MAX_LINES, raw)]))
        };
        assert_eq!(
            parse("0").unwrap_err(),
            ConfigError::InvalidMaxLines("0".to_string())
        );
        assert_eq!(
            parse("-3").unwrap_err(),
            ConfigError::InvalidMaxLines("-3".to_string())
        );
        assert_eq!(
            parse("lots").unwrap_err(),
            ConfigError::InvalidMaxLines("lots".to_string())
        );

        assert_eq!(parse("10").unwrap().max_lines, 10);
    }

    #[test]
    fn event_types_trimmed_and_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[
            (INPUT_USERNAME, "octocat"),
            (INPUT_EVENT_TYPES, " PushEvent , ISSUESEVENT,,pullrequestevent "),
        ]))
        .unwrap();

        assert!(config.allows(EventKind::Push));
        assert!(config.allows(EventKind::Issues));
        assert!(config.allows(EventKind::PullRequest));
        assert!(!config.allows(EventKind::Watch));
        assert!(!config.allows(EventKind::Unsupported));
    }

    #[test]
    fn blank_commit_message_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[
            (INPUT_USERNAME, "octocat"),
            (INPUT_COMMIT_MSG, "  "),
        ]))
        .unwrap();
        assert_eq!(config.commit_message, DEFAULT_COMMIT_MESSAGE);
    }
}
