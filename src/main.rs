use std::path::Path;

use octocrab::Octocrab;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readme_activity::config::Config;
use readme_activity::document::FsDocumentStore;
use readme_activity::git::{CommitIdentity, GitPersister};
use readme_activity::github::EventsClient;
use readme_activity::sync::{self, SyncOutcome};

/// The document holding the managed activity section.
const README_PATH: &str = "README.md";

/// Commit identity used for the activity commits.
const COMMIT_USER_NAME: &str = "readme-bot";
const COMMIT_USER_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readme_activity=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = try_main().await {
        tracing::error!(error = %err, "activity sync failed");
        std::process::exit(1);
    }
}

async fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let source = match std::env::var("GITHUB_TOKEN") {
        Ok(token) => EventsClient::from_token(token, &config.username)?,
        Err(_) => {
            tracing::warn!("GITHUB_TOKEN not set; using an unauthenticated client");
            EventsClient::new(Octocrab::default(), &config.username)
        }
    };

    let store = FsDocumentStore;
    let persister = GitPersister::new(
        ".",
        README_PATH,
        CommitIdentity {
            name: COMMIT_USER_NAME.to_string(),
            email: COMMIT_USER_EMAIL.to_string(),
        },
    );

    let outcome = sync::run(&source, &store, &persister, &config, Path::new(README_PATH)).await?;
    match outcome {
        SyncOutcome::Updated => tracing::info!("wrote recent activity to {README_PATH}"),
        SyncOutcome::NoChanges => tracing::info!("{README_PATH} already up to date"),
    }

    Ok(())
}
