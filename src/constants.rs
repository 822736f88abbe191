//! Central constants for create-pull-request

/// Environment variable names making up the configuration surface
pub mod env {
    pub const EVENT_PATH: &str = "GITHUB_EVENT_PATH";
    pub const TOKEN: &str = "GITHUB_TOKEN";
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    pub const API_URL: &str = "GITHUB_API_URL";
    pub const BRANCH: &str = "PULL_REQUEST_BRANCH";
    pub const COMMIT_MESSAGE: &str = "COMMIT_MESSAGE";
    pub const TITLE: &str = "PULL_REQUEST_TITLE";
    pub const BODY: &str = "PULL_REQUEST_BODY";
    pub const DEBUG_EVENT: &str = "DEBUG_EVENT";
}

/// Default values for Git operations
pub mod git {
    /// Prefix of the pull request branch, suffixed with the short HEAD sha
    pub const DEFAULT_BRANCH_PREFIX: &str = "create-pull-request/patch";

    /// Default commit message when none is provided
    pub const DEFAULT_COMMIT_MSG: &str = "Auto-committed changes by create-pull-request action";

    /// Name of the remote branches are pushed to and checked against
    pub const REMOTE: &str = "origin";
}

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("create-pull-request/", env!("CARGO_PKG_VERSION"));

    pub const DEFAULT_TITLE: &str = "Auto-generated by create-pull-request action";

    pub const DEFAULT_BODY: &str = "Auto-generated pull request by \
        [create-pull-request](https://github.com/peter-evans/create-pull-request) GitHub Action";
}
