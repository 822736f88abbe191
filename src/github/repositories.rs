//! GitHub Repository API operations

use super::client::{GitHubClient, error_from_response};
use super::types::GitHubRepo;
use crate::config::RepositorySlug;
use crate::{Error, Result};

impl GitHubClient {
    /// Get repository information from GitHub
    ///
    /// A missing repository, or one the token cannot see, comes back as
    /// `NotFound`.
    pub async fn get_repository(&self, slug: &RepositorySlug) -> Result<GitHubRepo> {
        let url = self.url(&format!("repos/{}/{}", slug.owner, slug.name));

        let response = self.authorized(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(
                response,
                &format!("Failed to get repository {}", slug),
            )
            .await);
        }

        response
            .json()
            .await
            .map_err(|e| Error::Api(format!("Failed to parse repository response: {}", e)))
    }
}
