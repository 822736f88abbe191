//! Environment configuration loading

use super::validation::{RepositorySlug, require_non_empty};
use crate::Result;
use crate::constants::{env, git, github};
use std::path::PathBuf;

/// Settings for a single run, resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub event_path: PathBuf,
    pub token: String,
    pub repository: RepositorySlug,
    pub api_url: String,
    pub branch_prefix: String,
    pub commit_message: String,
    pub title: String,
    pub body: String,
    pub debug_event: bool,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Required variables are checked in a fixed order (event path, token,
    /// repository) so the first missing one is the one reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let event_path = require_non_empty(env::EVENT_PATH, lookup(env::EVENT_PATH))?;
        let token = require_non_empty(env::TOKEN, lookup(env::TOKEN))?;
        let repository = require_non_empty(env::REPOSITORY, lookup(env::REPOSITORY))?;
        let repository = RepositorySlug::parse(&repository)?;

        let api_url = lookup(env::API_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| github::API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            event_path: PathBuf::from(event_path),
            token,
            repository,
            api_url,
            branch_prefix: lookup(env::BRANCH)
                .unwrap_or_else(|| git::DEFAULT_BRANCH_PREFIX.to_string()),
            commit_message: lookup(env::COMMIT_MESSAGE)
                .unwrap_or_else(|| git::DEFAULT_COMMIT_MSG.to_string()),
            title: lookup(env::TITLE).unwrap_or_else(|| github::DEFAULT_TITLE.to_string()),
            body: lookup(env::BODY).unwrap_or_else(|| github::DEFAULT_BODY.to_string()),
            debug_event: lookup(env::DEBUG_EVENT).is_some(),
        })
    }
}
