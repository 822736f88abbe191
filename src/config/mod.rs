//! Configuration management module
//!
//! Everything the action needs is handed to it through environment variables
//! by the workflow runner. [`Config`] resolves them once, up front, so a
//! missing token or repository is reported before the working tree is touched.

pub mod loader;
pub mod validation;

pub use loader::Config;
pub use validation::RepositorySlug;
