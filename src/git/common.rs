//! Common git utilities and shared helpers
//!
//! This module contains the console logger used throughout a run and the
//! single helper every git invocation goes through.

use crate::event::CommitIdentity;
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use std::process::{Command, Output};

/// Logger for run output with consistent formatting
///
/// Each message is prefixed with a label (the target repository) in
/// cyan/bold for easy identification in CI logs.
///
/// ## Example
///
/// ```rust
/// use create_pull_request::git::Logger;
///
/// let logger = Logger::new("owner/repo");
/// logger.info("Committing changes.");
/// logger.success("Created pull request 1.");
/// ```
pub struct Logger {
    label: String,
}

impl Logger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn info(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} | {}", self.label.cyan().bold(), msg.red());
    }
}

/// Run `git` in `repo_path` and return its trimmed stdout
///
/// When an identity is given it is passed as `-c` options so it applies to
/// this invocation only and never touches user or system configuration.
pub(crate) fn run_git(
    repo_path: &Path,
    identity: Option<&CommitIdentity>,
    args: &[&str],
) -> Result<String> {
    let output = git_output(repo_path, identity, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Like [`run_git`] but keeps both streams, for commands such as `push` that
/// report on stderr
pub(crate) fn git_output(
    repo_path: &Path,
    identity: Option<&CommitIdentity>,
    args: &[&str],
) -> Result<Output> {
    let mut command = Command::new("git");
    if let Some(identity) = identity {
        command
            .arg("-c")
            .arg(format!("user.email={}", identity.email))
            .arg("-c")
            .arg(format!("user.name={}", identity.name));
    }

    let output = command
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(|e| Error::Vcs(format!("Failed to execute git {}: {}", args.join(" "), e)))?;

    if !output.status.success() {
        return Err(Error::Vcs(format!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(output)
}
