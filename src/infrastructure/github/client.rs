//! GitHub HTTP client with `Link`-header pagination.
//!
//! Wraps the GitHub REST API v3 with the two operations the archiver
//! needs: a single authorized GET returning the decoded body plus the
//! next-page URL, and a loop that follows `rel="next"` links until the
//! collection is exhausted. No retry, no rate limiting; any failure
//! aborts the run.

use reqwest::header::LINK;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::domain::errors::{ArchiveError, ArchiveResult};

/// Base URL for the GitHub REST API v3.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// Static client identifier sent with every request.
const USER_AGENT: &str = "issuevault";

/// HTTP client for the GitHub REST API v3.
///
/// Holds one reusable connection pool for the duration of a run.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// GitHub personal access token or fine-grained token.
    token: String,
    /// API base URL; overridden in tests to point at a mock server.
    base_url: String,
}

impl GitHubClient {
    /// Create a new client with the given token.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE.to_string())
    }

    /// Create a client against a non-default base URL.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url,
        }
    }

    /// Resolve a request URL: absolute URLs (server-returned pages,
    /// `comments_url`) pass through; paths are joined to the base URL.
    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url, url)
        }
    }

    /// Issue one request and decode the JSON body.
    ///
    /// Returns the body together with the URL of the next page, if the
    /// response carried a `Link` header with a `rel="next"` entry.
    pub async fn fetch(
        &self,
        method: Method,
        url: &str,
    ) -> ArchiveResult<(Value, Option<String>)> {
        let request_url = self.resolve_url(url);
        tracing::debug!(method = %method, url = %request_url, "GitHub request");

        let resp = self
            .http
            .request(method, &request_url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ArchiveError::RequestFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let next_url = resp
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_next_link);

        let body = resp.json::<Value>().await?;
        Ok((body, next_url))
    }

    /// Fetch every page of a paginated collection, in page order.
    ///
    /// A body that is not a JSON array counts as a one-element page.
    pub async fn fetch_all_pages(&self, url: &str) -> ArchiveResult<Vec<Value>> {
        let mut results = Vec::new();
        let mut next = Some(url.to_string());
        let mut pages = 0u32;

        while let Some(current) = next {
            let (body, next_url) = self.fetch(Method::GET, &current).await?;
            match body {
                Value::Array(items) => results.extend(items),
                other => results.push(other),
            }
            pages += 1;
            next = next_url;
        }

        tracing::debug!(url, pages, items = results.len(), "pagination complete");
        Ok(results)
    }
}

/// Extract the `rel="next"` URL from a `Link` header value.
///
/// The header is a comma-separated list of `<url>; rel="..."` entries.
/// Only the entry whose relation token is exactly `next` matches; its
/// URL is the text between `<` and `>`.
fn parse_next_link(header: &str) -> Option<String> {
    header.split(", ").find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|param| param.trim() == "rel=\"next\"");
        if !is_next {
            return None;
        }
        let url = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        Some(url.to_string())
    })
}
