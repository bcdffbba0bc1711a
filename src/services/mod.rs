//! Service layer: run orchestration.

pub mod archiver;

pub use archiver::{ArchiveSummary, IssueArchiver, IssueSelection};
