use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. None of these are retried or rolled back.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed event payload: {0}")]
    Format(String),

    #[error("Git error: {0}")]
    Vcs(String),

    #[error("GitHub authentication failed: {0}")]
    Auth(String),

    #[error("GitHub resource not found: {0}")]
    NotFound(String),

    #[error("GitHub API error: {0}")]
    Api(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.to_string())
    }
}
