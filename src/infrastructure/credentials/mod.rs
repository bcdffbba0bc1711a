//! Credential resolution.
//!
//! The token comes from an explicit CLI argument when given, otherwise
//! from the `GITHUB_TOKEN` environment variable. The environment lookup
//! is injected so tests never touch process-wide state.

use crate::domain::errors::{ArchiveError, ArchiveResult};

/// Environment variable consulted when no explicit token is given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Resolve the API token from an explicit value or the environment.
///
/// An explicit token always wins. Empty values count as absent.
pub fn resolve_token<F>(explicit: Option<String>, env_lookup: F) -> ArchiveResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .filter(|t| !t.is_empty())
        .or_else(|| env_lookup(TOKEN_ENV_VAR).filter(|t| !t.is_empty()))
        .ok_or(ArchiveError::MissingToken(TOKEN_ENV_VAR))
}

/// Resolve the API token against the real process environment.
pub fn resolve_token_from_env(explicit: Option<String>) -> ArchiveResult<String> {
    resolve_token(explicit, |var| std::env::var(var).ok())
}
