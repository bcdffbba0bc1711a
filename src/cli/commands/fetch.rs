//! Implementation of the `issuevault fetch` command.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::cli::output::progress::create_spinner;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::RepoId;
use crate::infrastructure::credentials::resolve_token_from_env;
use crate::infrastructure::github::GitHubClient;
use crate::services::{IssueArchiver, IssueSelection};

/// Arguments for `issuevault fetch`.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// GitHub repository in owner/repo format
    pub repo: String,

    /// Specific issue numbers to fetch
    pub issues: Vec<u64>,

    /// Fetch every issue in the repository
    #[arg(long)]
    pub all: bool,

    /// GitHub API token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Output directory for JSON files
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
}

/// Result of a fetch run, printed on success.
#[derive(Debug, serde::Serialize)]
pub struct FetchOutput {
    /// Repository the issues came from.
    pub repo: String,
    /// Issue numbers archived, in write order.
    pub archived: Vec<u64>,
    /// Directory the files were written to.
    pub output_dir: PathBuf,
}

impl CommandOutput for FetchOutput {
    fn to_human(&self) -> String {
        format!(
            "Archived {} issue(s) from {}. JSON files saved in {}",
            self.archived.len(),
            self.repo,
            self.output_dir.display()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Execute the fetch command.
pub async fn execute(args: FetchArgs, json_mode: bool) -> Result<()> {
    if args.issues.is_empty() && !args.all {
        bail!("Either specify issue numbers or use --all to fetch all issues.");
    }

    let repo: RepoId = args.repo.parse()?;
    let selection = if args.all {
        IssueSelection::All
    } else {
        IssueSelection::Numbers(args.issues)
    };

    let token = resolve_token_from_env(args.token)?;

    tokio::fs::create_dir_all(&args.output)
        .await
        .with_context(|| format!("Failed to create output directory {}", args.output.display()))?;

    let archiver = IssueArchiver::new(GitHubClient::new(token), args.output);

    let spinner = (!json_mode).then(|| create_spinner(&format!("Fetching issues from {repo}")));
    let result = archiver.run(&repo, &selection).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let summary = result?;

    output(
        &FetchOutput {
            repo: repo.to_string(),
            archived: summary.archived,
            output_dir: summary.output_dir,
        },
        json_mode,
    );
    Ok(())
}
