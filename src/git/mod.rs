//! Git operations using system git commands for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`repository`]: the [`GitRepository`] handle and working-tree queries
//!   (dirty state, untracked files, active branch, short sha, remote refs)
//! - [`pull_request`]: the mutating steps that turn local changes into a
//!   pushed branch
//! - [`common`]: the console [`Logger`] and the git invocation helper

pub mod common;
pub mod pull_request;
pub mod repository;

pub use common::Logger;
pub use pull_request::{
    add_all_changes, commit_and_push, commit_changes, create_and_checkout_branch, push_branch,
};
pub use repository::GitRepository;
