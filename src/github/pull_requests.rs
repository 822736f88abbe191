//! GitHub Pull Request API operations

use super::client::{GitHubClient, error_from_response};
use super::types::{CreatePullRequestPayload, PullRequestRequest, PullRequestResult};
use crate::{Error, Result};
use async_trait::async_trait;

/// Something that can open pull requests
///
/// The run only ever talks to GitHub through this seam.
#[async_trait]
pub trait PullRequestApi {
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequestResult>;
}

impl GitHubClient {
    /// Open a pull request from `request.head` into `request.base`
    ///
    /// The repository is resolved first so an unknown slug is reported as
    /// such rather than as a generic rejection of the pull request.
    ///
    /// # Errors
    /// - `Auth` when the token is rejected (401/403)
    /// - `NotFound` when the repository cannot be resolved (404)
    /// - `Api` for anything else, e.g. 422 when head and base have no diff
    pub async fn open_pull_request(
        &self,
        request: &PullRequestRequest,
    ) -> Result<PullRequestResult> {
        let repo = self.get_repository(&request.repository).await?;

        let url = self.url(&format!("repos/{}/pulls", repo.full_name));
        let payload = CreatePullRequestPayload {
            title: &request.title,
            head: &request.head,
            base: &request.base,
            body: &request.body,
        };

        let response = self
            .authorized(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to create pull request").await);
        }

        response
            .json()
            .await
            .map_err(|e| Error::Api(format!("Failed to parse PR creation response: {}", e)))
    }
}

#[async_trait]
impl PullRequestApi for GitHubClient {
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequestResult> {
        if request.token != self.token() {
            // The request names its own credentials
            let client = GitHubClient::with_api_url(request.token.clone(), self.api_url());
            return client.open_pull_request(request).await;
        }
        self.open_pull_request(request).await
    }
}
