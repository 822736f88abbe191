//! create-pull-request - open a pull request from changes left in a CI checkout

pub mod branch;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod git;
pub mod github;
pub mod workflow;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Re-export commonly used types
pub use config::Config;
pub use workflow::{Outcome, run};
