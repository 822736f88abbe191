//! GitHub API integration module
//!
//! - [`client`]: Core GitHub client with authentication and status mapping
//! - [`auth`]: Token handling
//! - [`pull_requests`]: Pull request creation and the [`PullRequestApi`] seam
//! - [`repositories`]: Repository lookup
//! - [`types`]: Request and response types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use create_pull_request::config::RepositorySlug;
//! use create_pull_request::github::{GitHubClient, PullRequestApi, PullRequestRequest};
//!
//! # async fn example() -> create_pull_request::Result<()> {
//! let client = GitHubClient::new("your_token".to_string());
//! let pr = client
//!     .create_pull_request(&PullRequestRequest {
//!         token: "your_token".to_string(),
//!         repository: RepositorySlug::parse("owner/repo")?,
//!         head: "create-pull-request/patch-abc123".to_string(),
//!         base: "main".to_string(),
//!         title: "Update".to_string(),
//!         body: "Automated".to_string(),
//!     })
//!     .await?;
//! println!("Created pull request {}", pr.number);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod pull_requests;
pub mod repositories;
pub mod types;

pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use pull_requests::PullRequestApi;
pub use types::{GitHubRepo, PullRequestRequest, PullRequestResult};
