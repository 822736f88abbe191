//! Common test support utilities and fixtures
//!
//! Scratch repositories are real git working trees with a bare repository
//! wired up as `origin`, so pushes and remote-tracking refs behave exactly
//! as they do in a workflow checkout.

#![allow(dead_code)]

use async_trait::async_trait;
use create_pull_request::Config;
use create_pull_request::github::{PullRequestApi, PullRequestRequest, PullRequestResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

/// Run git in `dir`, panicking with stderr on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn configure_user(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// A working tree on `main` with one commit, pushed to a bare `origin`
pub struct TestRepo {
    pub root: TempDir,
    pub work: PathBuf,
    pub remote: PathBuf,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let remote = root.path().join("remote.git");
        let work = root.path().join("work");
        fs::create_dir_all(&remote).unwrap();
        fs::create_dir_all(&work).unwrap();

        git(&remote, &["init", "--bare"]);
        git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        git(&work, &["init"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        configure_user(&work);
        fs::write(work.join("README.md"), "# Test Repository\n").unwrap();
        git(&work, &["add", "."]);
        git(&work, &["commit", "-m", "Initial commit"]);
        git(
            &work,
            &["remote", "add", "origin", remote.to_str().unwrap()],
        );
        git(&work, &["push", "-u", "origin", "main"]);

        Self { root, work, remote }
    }

    pub fn short_sha(&self) -> String {
        git(&self.work, &["rev-parse", "--short", "HEAD"])
    }

    pub fn current_branch(&self) -> String {
        git(&self.work, &["symbolic-ref", "--short", "HEAD"])
    }

    /// Modify a tracked file
    pub fn modify_tracked(&self) {
        fs::write(self.work.join("README.md"), "# Test Repository\n\nUpdated\n").unwrap();
    }

    pub fn add_untracked(&self, name: &str) {
        fs::write(self.work.join(name), "generated\n").unwrap();
    }

    /// Publish a branch on the remote at the current HEAD
    pub fn push_remote_branch(&self, branch: &str) {
        git(
            &self.work,
            &["push", "origin", &format!("HEAD:refs/heads/{}", branch)],
        );
    }

    /// Branches present on the bare remote
    pub fn remote_branches(&self) -> Vec<String> {
        git(
            &self.remote,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads/"],
        )
        .lines()
        .map(str::to_string)
        .collect()
    }

    /// A second, fresh checkout of the remote's `main`, as a rerun would get
    pub fn fresh_clone(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        git(
            self.root.path(),
            &["clone", self.remote.to_str().unwrap(), dir.to_str().unwrap()],
        );
        configure_user(&dir);
        dir
    }

    pub fn write_event(&self, json: &str) -> PathBuf {
        write_event(self.root.path(), json)
    }
}

pub fn write_event(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("event.json");
    fs::write(&path, json).expect("Failed to write event");
    path
}

pub const PUSH_EVENT: &str =
    r#"{"deleted": false, "head_commit": {"author": {"email": "a@x.com", "name": "A"}}}"#;

pub const DELETE_EVENT: &str = r#"{"deleted": true}"#;

/// Build a config from explicit variables, defaults for the rest
pub fn config_with(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned()).expect("valid test config")
}

pub fn test_config(event_path: &Path) -> Config {
    config_with(&[
        ("GITHUB_EVENT_PATH", event_path.to_str().unwrap()),
        ("GITHUB_TOKEN", "test-token"),
        ("GITHUB_REPOSITORY", "owner/repo"),
    ])
}

/// Pull request API double that records what it was asked to do
pub struct RecordingApi {
    pub requests: Mutex<Vec<PullRequestRequest>>,
    pub number: u64,
}

impl RecordingApi {
    pub fn new(number: u64) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            number,
        }
    }

    pub fn calls(&self) -> Vec<PullRequestRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestApi for RecordingApi {
    async fn create_pull_request(
        &self,
        request: &PullRequestRequest,
    ) -> create_pull_request::Result<PullRequestResult> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(PullRequestResult {
            number: self.number,
            html_url: format!("https://github.com/owner/repo/pull/{}", self.number),
        })
    }
}
