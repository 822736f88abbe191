//! GitHub API client implementation
//!
//! `GitHubClient` holds the HTTP client, the credentials and the API base
//! URL. Endpoint groups extend it with `impl` blocks in their own modules:
//! - `pull_requests.rs` - Pull request creation
//! - `repositories.rs` - Repository lookup

use super::auth::GitHubAuth;
use crate::Error;
use crate::constants::github::DEFAULT_USER_AGENT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

/// GitHub API client for interacting with GitHub's REST API
///
/// ## Example
///
/// ```rust,no_run
/// use create_pull_request::github::GitHubClient;
///
/// let client = GitHubClient::new("your_github_token".to_string());
/// // GitHub Enterprise
/// let ghe = GitHubClient::with_api_url("token".to_string(), "https://ghe.example.com/api/v3");
/// ```
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: GitHubAuth,
    pub(crate) api_url: String,
}

impl GitHubClient {
    /// Create a client against api.github.com
    pub fn new(token: String) -> Self {
        Self::with_api_url(token, crate::constants::github::API_BASE)
    }

    /// Create a client against another API root, e.g. GitHub Enterprise
    pub fn with_api_url(token: String, api_url: &str) -> Self {
        Self {
            client: Client::new(),
            auth: GitHubAuth::new(token),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token(&self) -> &str {
        self.auth.token()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Attach the headers every request carries
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", self.auth.get_auth_header())
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", "application/vnd.github+json")
    }
}

/// Map a non-success response to the matching error kind
pub(crate) async fn error_from_response(response: Response, action: &str) -> Error {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    error_for_status(status, action, &error_text)
}

pub(crate) fn error_for_status(status: StatusCode, action: &str, detail: &str) -> Error {
    let message = format!(
        "{} ({} {}): {}",
        action,
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        detail
    );

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Auth(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        _ => Error::Api(message),
    }
}
