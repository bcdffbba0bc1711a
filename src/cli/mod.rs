//! Command-line interface.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Archive GitHub issues and their comments as per-issue JSON files.
#[derive(Parser, Debug)]
#[command(name = "issuevault", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download issues and comments from a repository
    Fetch(commands::fetch::FetchArgs),
}

/// Print an error in the selected mode and exit with a failing status.
///
/// The original tool swallowed errors and exited zero; automation could
/// not tell success from failure, so failures now exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "success": false, "error": format!("{err:#}") });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("An error occurred: {err:#}");
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fetch_parses_numbers_and_flags() {
        let cli = Cli::parse_from([
            "issuevault", "fetch", "octo/widgets", "1", "2", "--output", "out", "--token", "t",
        ]);
        let Commands::Fetch(args) = cli.command;
        assert_eq!(args.repo, "octo/widgets");
        assert_eq!(args.issues, vec![1, 2]);
        assert!(!args.all);
        assert_eq!(args.token.as_deref(), Some("t"));
        assert_eq!(args.output, std::path::PathBuf::from("out"));
    }

    #[test]
    fn fetch_parses_all_mode() {
        let cli = Cli::parse_from(["issuevault", "--json", "fetch", "octo/widgets", "--all"]);
        assert!(cli.json);
        let Commands::Fetch(args) = cli.command;
        assert!(args.all);
        assert!(args.issues.is_empty());
    }
}
