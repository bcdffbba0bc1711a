//! Issuevault - GitHub Issue Archiver
//!
//! Issuevault downloads issues (and their comments) from the GitHub REST
//! API and persists each issue as one JSON file on disk, shaped
//! `{"issue": {...}, "comments": [...]}`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): errors and opaque payload models
//! - **Service Layer** (`services`): the archiving run
//! - **Infrastructure Layer** (`infrastructure`): GitHub HTTP client and
//!   credential resolution
//! - **CLI Layer** (`cli`): command-line interface

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ArchiveError, ArchiveResult};
pub use domain::models::{Comment, Issue, IssueRecord, RepoId};
pub use infrastructure::credentials::{resolve_token, TOKEN_ENV_VAR};
pub use infrastructure::github::GitHubClient;
pub use services::{ArchiveSummary, IssueArchiver, IssueSelection};
