//! Domain errors for the issuevault archiver.

use thiserror::Error;

/// Errors that can occur while archiving issues.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// No token was passed and the fallback environment variable is unset.
    #[error("GitHub token not provided. Use --token or set the {0} environment variable.")]
    MissingToken(&'static str),

    /// Repository identifier was not in `owner/repo` form.
    #[error("Invalid repository identifier '{0}': expected owner/repo")]
    InvalidRepo(String),

    /// The server answered with a non-2xx status code.
    #[error("HTTP request failed with status code {status}: {reason}")]
    RequestFailed {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase for the status code.
        reason: String,
    },

    /// Transport-level failure (connection, TLS, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An issue payload is missing a field the archiver reads.
    #[error("Issue payload is missing the '{0}' field")]
    MissingField(&'static str),

    /// Writing an archive file failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Path of the file being written.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type ArchiveResult<T> = Result<T, ArchiveError>;
