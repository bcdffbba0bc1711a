//! Domain models.

pub mod issue;
pub mod repo;

pub use issue::{Comment, Issue, IssueRecord};
pub use repo::RepoId;
