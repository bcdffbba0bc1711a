//! Issue and comment payload models.
//!
//! The archiver never interprets GitHub payloads beyond two fields
//! (`number` and `comments_url`), so issues and comments are carried as
//! opaque JSON objects and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::{ArchiveError, ArchiveResult};

/// An issue as returned by the GitHub API, kept as an opaque JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Issue(pub Map<String, Value>);

impl Issue {
    /// Interpret an arbitrary JSON value as an issue payload.
    ///
    /// Returns `Err` if the value is not a JSON object.
    pub fn from_value(value: Value) -> ArchiveResult<Self> {
        let map = serde_json::from_value(value)?;
        Ok(Self(map))
    }

    /// The issue's sequential number within its repository.
    pub fn number(&self) -> ArchiveResult<u64> {
        self.0
            .get("number")
            .and_then(Value::as_u64)
            .ok_or(ArchiveError::MissingField("number"))
    }

    /// API URL of this issue's comments collection.
    pub fn comments_url(&self) -> ArchiveResult<&str> {
        self.0
            .get("comments_url")
            .and_then(Value::as_str)
            .ok_or(ArchiveError::MissingField("comments_url"))
    }
}

/// A comment payload, passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Comment(pub Value);

/// The persisted unit: one issue plus its full comment list.
///
/// Built fully in memory, written once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    /// The issue payload as fetched.
    pub issue: Issue,
    /// All comments, in page order.
    pub comments: Vec<Comment>,
}
