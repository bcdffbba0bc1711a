//! Issue archiving service.
//!
//! Orchestrates the GitHub client: fetch one issue (or every issue),
//! fetch all pages of each issue's comments, and write one JSON file
//! per issue. Fully sequential; an issue's comments are complete
//! before its record is written, and files appear in processing order.

use std::path::{Path, PathBuf};

use reqwest::Method;

use crate::domain::errors::{ArchiveError, ArchiveResult};
use crate::domain::models::{Comment, Issue, IssueRecord, RepoId};
use crate::infrastructure::github::GitHubClient;

/// Which issues a run should archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueSelection {
    /// Every issue the list endpoint returns, in server order.
    All,
    /// Specific issue numbers, processed in the given order.
    Numbers(Vec<u64>),
}

/// Summary of a completed archive run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArchiveSummary {
    /// Issue numbers archived, in the order their files were written.
    pub archived: Vec<u64>,
    /// Directory the files were written to.
    pub output_dir: PathBuf,
}

/// Archives issues and their comments as per-issue JSON files.
#[derive(Debug)]
pub struct IssueArchiver {
    /// Client shared across every request of the run.
    client: GitHubClient,
    /// Directory receiving `{number}.json` files. Must already exist.
    output_dir: PathBuf,
}

impl IssueArchiver {
    /// Create an archiver writing into `output_dir`.
    pub fn new(client: GitHubClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Archive the selected issues of `repo`.
    ///
    /// Mode A (`Numbers`): fetch each issue resource in the given order.
    /// Mode B (`All`): fetch every page of the repository's issue list,
    /// then process issues in server order. Either way, each issue's
    /// comments are fetched in full before its record is written.
    pub async fn run(
        &self,
        repo: &RepoId,
        selection: &IssueSelection,
    ) -> ArchiveResult<ArchiveSummary> {
        let mut archived = Vec::new();

        match selection {
            IssueSelection::Numbers(numbers) => {
                for &number in numbers {
                    let (body, _) = self
                        .client
                        .fetch(Method::GET, &repo.issue_path(number))
                        .await?;
                    let issue = Issue::from_value(body)?;
                    archived.push(self.archive_issue(issue).await?);
                }
            }
            IssueSelection::All => {
                let items = self.client.fetch_all_pages(&repo.issues_path()).await?;
                tracing::info!(repo = %repo, issues = items.len(), "fetched issue list");
                for item in items {
                    let issue = Issue::from_value(item)?;
                    archived.push(self.archive_issue(issue).await?);
                }
            }
        }

        Ok(ArchiveSummary {
            archived,
            output_dir: self.output_dir.clone(),
        })
    }

    /// Fetch an issue's comments and persist its record.
    ///
    /// Returns the issue number on success.
    async fn archive_issue(&self, issue: Issue) -> ArchiveResult<u64> {
        let number = issue.number()?;
        let comments_url = issue.comments_url()?.to_string();

        let comments: Vec<Comment> = self
            .client
            .fetch_all_pages(&comments_url)
            .await?
            .into_iter()
            .map(Comment)
            .collect();

        let record = IssueRecord { issue, comments };
        let path = write_record(&self.output_dir, number, &record).await?;
        tracing::info!(
            issue = number,
            comments = record.comments.len(),
            path = %path.display(),
            "archived issue"
        );
        Ok(number)
    }
}

/// Write one record to `{dir}/{number}.json`, overwriting any prior file.
///
/// Pretty-printed with serde_json's default 2-space indent. No atomic
/// rename; a run killed mid-write leaves a truncated file.
async fn write_record(dir: &Path, number: u64, record: &IssueRecord) -> ArchiveResult<PathBuf> {
    let path = dir.join(format!("{number}.json"));
    let json = serde_json::to_string_pretty(record)?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| ArchiveError::Io {
            path: path.display().to_string(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_fixture(number: u64, title: &str) -> IssueRecord {
        IssueRecord {
            issue: Issue::from_value(json!({
                "number": number,
                "title": title,
                "comments_url": "https://api.github.com/repos/o/r/issues/1/comments",
            }))
            .unwrap(),
            comments: vec![],
        }
    }

    #[tokio::test]
    async fn write_record_creates_number_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_record(dir.path(), 7, &record_fixture(7, "first"))
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("7.json"));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["issue"]["number"], 7);
        assert_eq!(written["comments"], json!([]));
    }

    #[tokio::test]
    async fn write_record_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_record(dir.path(), 7, &record_fixture(7, "first"))
            .await
            .unwrap();
        write_record(dir.path(), 7, &record_fixture(7, "second"))
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("7.json")).unwrap())
                .unwrap();
        assert_eq!(written["issue"]["title"], "second");
    }

    #[tokio::test]
    async fn write_record_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let result = write_record(&missing, 1, &record_fixture(1, "x")).await;
        assert!(matches!(result, Err(ArchiveError::Io { .. })));
    }
}
