//! Output formatting utilities for the CLI.

pub mod progress;

use serde::Serialize;

/// A command result that can render itself for humans or as JSON.
pub trait CommandOutput: Serialize {
    /// Plain-text rendering for terminal users.
    fn to_human(&self) -> String;

    /// JSON rendering for `--json` mode.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}
