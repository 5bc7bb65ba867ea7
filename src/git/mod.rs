//! Local git operations for persisting the updated document.
//!
//! Persistence is one commit-and-push cycle: stage the target file, commit
//! with a per-command identity, push to the default remote. A commit that
//! finds nothing staged is a benign outcome, not a failure: it is how the
//! run stays idempotent when the working tree already matches the document.
//!
//! All git commands run with system and user config disabled and terminal
//! prompts off, so behavior is identical across runner machines.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command failed.
    #[error("git command failed: {command}\nstderr: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// IO error spawning git.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

/// Result of a persist cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The document was committed and pushed.
    Committed,

    /// The working tree already matched the document; nothing was pushed.
    NothingToCommit,
}

/// Identity used for creating commits.
///
/// Passed via `-c` flags on the commit command, so commits work even when
/// global/system git config is disabled and no per-repo config exists.
#[derive(Debug, Clone)]
pub struct CommitIdentity {
    /// The committer/author name (git `user.name`).
    pub name: String,

    /// The committer/author email (git `user.email`).
    pub email: String,
}

/// The persistence capability: commit and push the updated document.
pub trait Persister {
    /// Runs one commit-and-push cycle with the given commit message.
    fn persist(&self, message: &str) -> GitResult<PersistOutcome>;
}

/// Production persister invoking the `git` binary.
#[derive(Debug, Clone)]
pub struct GitPersister {
    /// Repository working directory.
    workdir: PathBuf,

    /// The file to stage, relative to `workdir`.
    file: PathBuf,

    /// Identity for the commit.
    identity: CommitIdentity,
}

impl GitPersister {
    /// Creates a persister for one file in one repository.
    pub fn new(
        workdir: impl Into<PathBuf>,
        file: impl Into<PathBuf>,
        identity: CommitIdentity,
    ) -> Self {
        Self {
            workdir: workdir.into(),
            file: file.into(),
            identity,
        }
    }
}

impl Persister for GitPersister {
    fn persist(&self, message: &str) -> GitResult<PersistOutcome> {
        let file = self.file.to_string_lossy();
        run_git_sync(&self.workdir, &["add", &file])?;

        let output = git_commit_command(&self.workdir, &self.identity)
            .args(["commit", "-m", message])
            .output()?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);

            if is_nothing_to_commit(&stdout, &stderr) {
                return Ok(PersistOutcome::NothingToCommit);
            }

            return Err(GitError::CommandFailed {
                command: format!("git commit -m {message:?}"),
                stderr: stderr.into_owned(),
            });
        }

        run_git_sync(&self.workdir, &["push"])?;
        Ok(PersistOutcome::Committed)
    }
}

/// Checks whether commit output reports an empty staging area.
///
/// Git prints the message on stdout (it is part of the status summary), but
/// both streams are checked since the exact channel is not contractual.
fn is_nothing_to_commit(stdout: &str, stderr: &str) -> bool {
    stdout.contains("nothing to commit") || stderr.contains("nothing to commit")
}

/// Create a git Command with clean environment (no system/user config).
///
/// This ensures consistent behavior across different machines by ignoring
/// system and user git configuration (e.g., hooks, aliases).
fn git_command(workdir: &Path) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(workdir);

    // Disable system and user config for reproducible behavior
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null");

    // Disable terminal prompts
    cmd.env("GIT_TERMINAL_PROMPT", "0");

    cmd
}

/// Create a git Command configured for commit operations.
///
/// Extends [`git_command`] with identity configuration passed via `-c`
/// flags. All config is per-command; no `.git/config` changes are made.
fn git_commit_command(workdir: &Path, identity: &CommitIdentity) -> Command {
    let mut cmd = git_command(workdir);

    cmd.arg("-c");
    cmd.arg(format!("user.name={}", identity.name));
    cmd.arg("-c");
    cmd.arg(format!("user.email={}", identity.email));

    cmd
}

/// Run a git command in the given working directory.
///
/// Returns the command output on success, or a GitError on failure.
fn run_git_sync(workdir: &Path, args: &[&str]) -> GitResult<Output> {
    let output = git_command(workdir).args(args).output()?;

    if output.status.success() {
        Ok(output)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let command = format!("git {}", args.join(" "));
        Err(GitError::CommandFailed { command, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_commit_detected_on_either_stream() {
        assert!(is_nothing_to_commit(
            "On branch main\nnothing to commit, working tree clean\n",
            ""
        ));
        assert!(is_nothing_to_commit("", "nothing to commit"));
        assert!(!is_nothing_to_commit(
            "On branch main\n1 file changed\n",
            ""
        ));
    }

    #[test]
    fn commit_command_carries_identity_flags() {
        let identity = CommitIdentity {
            name: "readme-bot".to_string(),
            email: "bot@example.com".to_string(),
        };
        let cmd = git_commit_command(Path::new("."), &identity);
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            vec![
                "-c",
                "user.name=readme-bot",
                "-c",
                "user.email=bot@example.com",
            ]
        );
    }

    #[test]
    fn git_environment_is_isolated() {
        let cmd = git_command(Path::new("."));
        let env: Vec<(String, String)> = cmd
            .get_envs()
            .filter_map(|(k, v)| {
                Some((
                    k.to_string_lossy().into_owned(),
                    v?.to_string_lossy().into_owned(),
                ))
            })
            .collect();

        assert!(env.contains(&("GIT_CONFIG_NOSYSTEM".to_string(), "1".to_string())));
        assert!(env.contains(&("GIT_CONFIG_GLOBAL".to_string(), "/dev/null".to_string())));
        assert!(env.contains(&("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())));
    }
}
