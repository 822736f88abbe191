//! Git operations for pull request workflows
//!
//! ## Typical PR Workflow
//!
//! 1. [`create_and_checkout_branch`] - Create and switch to the new branch at HEAD
//! 2. [`add_all_changes`] - Stage modified and untracked files alike
//! 3. [`commit_changes`] - Commit the staged changes with a message
//! 4. [`push_branch`] - Push the branch and set its upstream
//!
//! [`commit_and_push`] runs all four in order. Every step is fatal on failure
//! and nothing is rolled back: a half-finished sequence stays in place for
//! the operator to inspect.

use super::common::git_output;
use super::repository::GitRepository;
use crate::Result;
use crate::constants::git::REMOTE;
use crate::event::CommitIdentity;

/// Create a branch rooted at the current HEAD and switch to it
pub fn create_and_checkout_branch(repo: &GitRepository, branch_name: &str) -> Result<()> {
    repo.git(&["checkout", "-b", branch_name, "HEAD"])?;
    Ok(())
}

/// Add all changes, including untracked files and deletions
pub fn add_all_changes(repo: &GitRepository) -> Result<()> {
    repo.git(&["add", "-A"])?;
    Ok(())
}

/// Commit staged changes with a message
pub fn commit_changes(repo: &GitRepository, message: &str) -> Result<()> {
    repo.git(&["commit", "-m", message])?;
    Ok(())
}

/// Push a branch to `origin` and set upstream, returning what git reported
pub fn push_branch(repo: &GitRepository, branch_name: &str) -> Result<String> {
    let output = git_output(
        repo.path(),
        repo.identity(),
        &["push", "--set-upstream", REMOTE, branch_name],
    )?;

    let report = [
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    ]
    .iter()
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join("\n");

    Ok(report)
}

/// Commit the working tree to `branch_name` as `identity` and push it
///
/// Returns the push report.
pub fn commit_and_push(
    repo: &GitRepository,
    identity: &CommitIdentity,
    branch_name: &str,
    message: &str,
) -> Result<String> {
    let repo = repo.clone().with_identity(identity.clone());

    create_and_checkout_branch(&repo, branch_name)?;
    add_all_changes(&repo)?;
    commit_changes(&repo, message)?;
    push_branch(&repo, branch_name)
}
