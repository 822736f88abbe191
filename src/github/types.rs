//! GitHub workflow types

use crate::config::RepositorySlug;
use serde::{Deserialize, Serialize};

/// Everything needed to open a pull request
#[derive(Debug, Clone)]
pub struct PullRequestRequest {
    pub token: String,
    pub repository: RepositorySlug,
    /// Source branch
    pub head: String,
    /// Destination branch
    pub base: String,
    pub title: String,
    pub body: String,
}

/// The pull request GitHub created
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequestResult {
    pub number: u64,
    #[serde(default)]
    pub html_url: String,
}

/// Repository as returned by `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub full_name: String,
}

#[derive(Serialize)]
pub(crate) struct CreatePullRequestPayload<'a> {
    pub title: &'a str,
    pub head: &'a str,
    pub base: &'a str,
    pub body: &'a str,
}
