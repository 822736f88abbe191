//! Configuration validation utilities

use crate::{Error, Result};
use regex::Regex;
use std::fmt;

/// `owner/name` identifier of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    pub owner: String,
    pub name: String,
}

impl RepositorySlug {
    /// Parse a slug in the `owner/name` form used by `GITHUB_REPOSITORY`
    ///
    /// Surrounding whitespace and a trailing `.git` are tolerated; anything
    /// with more or fewer than two path segments is rejected.
    pub fn parse(slug: &str) -> Result<Self> {
        let slug = slug.trim().trim_end_matches(".git");
        let pattern = Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$")
            .map_err(|e| Error::Config(e.to_string()))?;

        let captures = pattern.captures(slug).ok_or_else(|| {
            Error::Config(format!(
                "Invalid repository '{}': expected the form 'owner/name'",
                slug
            ))
        })?;

        Ok(Self {
            owner: captures[1].to_string(),
            name: captures[2].to_string(),
        })
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Reject values that are absent or carry nothing usable
pub fn require_non_empty(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(Error::Config(format!(
            "Environment variable {} is set but empty",
            name
        ))),
        None => Err(Error::Config(format!(
            "Required environment variable {} is not set",
            name
        ))),
    }
}
