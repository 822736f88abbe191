//! Working-tree inspection
//!
//! [`GitRepository`] is the handle the run holds on the local checkout. The
//! read-only queries live here; the mutating pull request steps are in
//! [`super::pull_request`].

use super::common::run_git;
use crate::Result;
use crate::constants::git::REMOTE;
use crate::event::CommitIdentity;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A local git working tree
#[derive(Debug, Clone)]
pub struct GitRepository {
    path: PathBuf,
    identity: Option<CommitIdentity>,
}

impl GitRepository {
    /// Open the working tree containing `path`
    ///
    /// The handle is rooted at the top level of the work tree so every query
    /// sees the whole tree, whichever subdirectory `path` names. Fails with a
    /// git error if `path` is not inside a work tree.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let toplevel = run_git(path.as_ref(), None, &["rev-parse", "--show-toplevel"])?;
        Ok(Self {
            path: PathBuf::from(toplevel),
            identity: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scope a commit identity to this handle
    ///
    /// Every git command run afterwards through this handle commits as
    /// `identity`; global configuration is left untouched.
    pub fn with_identity(mut self, identity: CommitIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn identity(&self) -> Option<&CommitIdentity> {
        self.identity.as_ref()
    }

    pub(crate) fn git(&self, args: &[&str]) -> Result<String> {
        run_git(&self.path, self.identity.as_ref(), args)
    }

    /// Whether tracked files differ from HEAD, staged or not
    pub fn is_dirty(&self) -> Result<bool> {
        let status = self.git(&["status", "--porcelain", "--untracked-files=no"])?;
        Ok(!status.is_empty())
    }

    /// Untracked files, honouring ignore rules
    pub fn untracked_files(&self) -> Result<Vec<String>> {
        let output = self.git(&["ls-files", "--others", "--exclude-standard"])?;
        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Whether there is anything to commit
    pub fn has_changes(&self) -> Result<bool> {
        Ok(self.is_dirty()? || !self.untracked_files()?.is_empty())
    }

    /// Name of the checked-out branch; detached HEAD is an error
    pub fn active_branch_name(&self) -> Result<String> {
        self.git(&["symbolic-ref", "--short", "HEAD"])
    }

    pub fn short_head_sha(&self) -> Result<String> {
        self.git(&["rev-parse", "--short", "HEAD"])
    }

    /// Names of the remote-tracking refs of `origin`, e.g. `origin/main`
    ///
    /// Always `refs/remotes/` stripped; `refname:short` would lengthen names
    /// that collide with a local branch.
    pub fn remote_branch_refs(&self) -> Result<BTreeSet<String>> {
        let output = self.git(&[
            "for-each-ref",
            "--format=%(refname:lstrip=2)",
            &format!("refs/remotes/{}/", REMOTE),
        ])?;
        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
