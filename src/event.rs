//! Workflow event payload handling
//!
//! GitHub Actions writes the webhook payload that triggered the run to the
//! file named by `GITHUB_EVENT_PATH`. Only the handful of fields the action
//! acts on are decoded; the raw document is kept for the debug dump.

use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HeadCommit {
    pub author: Author,
}

/// The decoded trigger event
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerEvent {
    /// Set on push events that delete a branch
    pub deleted: bool,
    /// `null` on branch deletion, so only required once an identity is needed
    #[serde(default)]
    pub head_commit: Option<HeadCommit>,
    #[serde(skip)]
    raw: Value,
}

/// Author identity applied to the generated commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub email: String,
    pub name: String,
}

impl TriggerEvent {
    /// Decode an event from its JSON text
    pub fn parse(content: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(content)?;
        let mut event: TriggerEvent = serde_json::from_value(raw.clone())?;
        event.raw = raw;
        Ok(event)
    }

    /// The identity of the author of the pushed HEAD commit
    pub fn commit_identity(&self) -> Result<CommitIdentity> {
        let author = &self
            .head_commit
            .as_ref()
            .ok_or_else(|| Error::Format("event has no head_commit author".to_string()))?
            .author;

        Ok(CommitIdentity {
            email: author.email.clone(),
            name: author.name.clone(),
        })
    }

    /// The payload as received, for diagnostics
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Read and decode the event payload at `path`
///
/// With `debug` set the payload is echoed to stdout as indented JSON with
/// sorted keys.
pub fn read_event(path: &Path, debug: bool) -> Result<TriggerEvent> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let event = TriggerEvent::parse(&content)?;

    if debug {
        println!("{}", serde_json::to_string_pretty(event.raw())?);
    }

    Ok(event)
}

/// Whether the event carries nothing to act on
///
/// Branch deletions have no working tree to diff. This is the single place to
/// classify further payload shapes as ignorable.
pub fn should_ignore(event: &TriggerEvent) -> bool {
    event.deleted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_push_event() {
        let event = TriggerEvent::parse(
            r#"{"deleted": false, "head_commit": {"author": {"email": "a@x.com", "name": "A"}}}"#,
        )
        .unwrap();

        assert!(!event.deleted);
        assert!(!should_ignore(&event));
        assert_eq!(
            event.commit_identity().unwrap(),
            CommitIdentity {
                email: "a@x.com".to_string(),
                name: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_deleted_event_is_ignored() {
        let event = TriggerEvent::parse(r#"{"deleted": true, "head_commit": null}"#).unwrap();
        assert!(should_ignore(&event));
        assert!(event.head_commit.is_none());
    }

    #[test]
    fn test_missing_deleted_is_format_error() {
        let err = TriggerEvent::parse(r#"{"head_commit": null}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_stringly_deleted_is_rejected() {
        let err = TriggerEvent::parse(r#"{"deleted": "True"}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_missing_author_is_format_error() {
        let event = TriggerEvent::parse(r#"{"deleted": false}"#).unwrap();
        assert!(matches!(event.commit_identity(), Err(Error::Format(_))));

        let err = TriggerEvent::parse(r#"{"deleted": false, "head_commit": {"author": {}}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_raw_payload_is_retained() {
        let event =
            TriggerEvent::parse(r#"{"deleted": true, "ref": "refs/heads/gone"}"#).unwrap();
        assert_eq!(event.raw()["ref"], "refs/heads/gone");
    }
}
