//! The end-to-end run
//!
//! Read the event, inspect the working tree, and only when there is
//! something new to propose commit it to a fresh branch, push, and open the
//! pull request. Every early exit is an [`Outcome`], not an error.

use crate::branch::{branch_exists, name_branch};
use crate::config::Config;
use crate::event::{read_event, should_ignore};
use crate::git::{GitRepository, Logger, commit_and_push};
use crate::github::{PullRequestApi, PullRequestRequest};
use crate::Result;
use std::path::Path;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event was one the action does not act on
    Ignored,
    /// A previous run already pushed this branch
    BranchExists { branch: String },
    /// Nothing modified or untracked
    NoChanges,
    Created {
        number: u64,
        branch: String,
        base: String,
    },
}

/// Run the action against the working tree at `repo_path`
pub async fn run(config: &Config, repo_path: &Path, api: &dyn PullRequestApi) -> Result<Outcome> {
    let logger = Logger::new(config.repository.to_string());

    let event = read_event(&config.event_path, config.debug_event)?;
    if should_ignore(&event) {
        logger.warn("Ignoring delete branch event.");
        return Ok(Outcome::Ignored);
    }

    let repo = GitRepository::open(repo_path)?;
    let branch = name_branch(&config.branch_prefix, &repo.short_head_sha()?);

    if branch_exists(&repo.remote_branch_refs()?, &branch) {
        logger.warn(&format!(
            "Pull request branch '{}' already exists for this commit. Skipping.",
            branch
        ));
        return Ok(Outcome::BranchExists { branch });
    }

    if !repo.has_changes()? {
        logger.warn("Repository has no modified or untracked files. Skipping.");
        return Ok(Outcome::NoChanges);
    }
    logger.info("Repository has modified or untracked files.");

    let identity = event.commit_identity()?;
    // Captured before the switch; this becomes the pull request base
    let base = repo.active_branch_name()?;

    logger.info("Committing changes.");
    let push_report = commit_and_push(&repo, &identity, &branch, &config.commit_message)?;
    if !push_report.is_empty() {
        logger.info(&push_report);
    }

    logger.info(&format!(
        "Creating a request to pull {} into {}.",
        branch, base
    ));
    let pull_request = api
        .create_pull_request(&PullRequestRequest {
            token: config.token.clone(),
            repository: config.repository.clone(),
            head: branch.clone(),
            base: base.clone(),
            title: config.title.clone(),
            body: config.body.clone(),
        })
        .await?;

    logger.success(&format!("Created pull request {}.", pull_request.number));

    Ok(Outcome::Created {
        number: pull_request.number,
        branch,
        base,
    })
}
