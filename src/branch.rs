//! Pull request branch naming and the collision check
//!
//! The branch name depends only on the prefix and the HEAD commit, so a rerun
//! against the same commit lands on the same name. Finding that name already
//! on the remote is how a rerun knows the work was done.

use crate::constants::git::REMOTE;
use std::collections::BTreeSet;

/// `{prefix}-{short_sha}`
pub fn name_branch(prefix: &str, short_sha: &str) -> String {
    format!("{}-{}", prefix, short_sha)
}

/// Whether `origin/{branch}` is among the remote-tracking refs
///
/// Two runs started at the same moment can both see `false` here; nothing
/// guards against that.
pub fn branch_exists(remote_refs: &BTreeSet<String>, branch: &str) -> bool {
    remote_refs.contains(&format!("{}/{}", REMOTE, branch))
}
