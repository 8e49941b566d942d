//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use whattodo_core::{DEFAULT_DATA_FILE, ParseError, TaskStatus};

#[derive(Debug, Parser)]
#[command(name = "whattodo")]
#[command(version)]
#[command(about = "What Todo: a single task board kept in a JSON file")]
pub struct Cli {
    /// Log what is happening (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Board file
    #[arg(short, long, global = true, env = "WHATTODO_FILE", default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a new board, replacing the current one
    Create {
        /// Board name
        name: String,
    },
    /// Add a task to the board
    Add {
        /// Task description
        description: String,
    },
    /// Change a task's description and/or status
    Update {
        /// 0-based task index
        index: usize,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New status: `done` or `not-done`
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },
    /// Remove a task from the board
    Remove {
        /// 0-based task index
        index: usize,
    },
    /// Remove every task from the board
    Clean,
    /// List the board's tasks
    List,
    /// Print how many tasks are on the board
    Count,
}

fn parse_status(value: &str) -> Result<TaskStatus, ParseError> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("whattodo").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["list", "-v", "--yes", "--file", "/tmp/board.json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.yes);
        assert_eq!(cli.file, PathBuf::from("/tmp/board.json"));
        assert_eq!(cli.command, Command::List);
    }

    #[rstest]
    #[case::done("done", TaskStatus::Done)]
    #[case::not_done_dashed("not-done", TaskStatus::NotDone)]
    #[case::not_done_spaced("not done", TaskStatus::NotDone)]
    fn update_accepts_status_tokens(#[case] token: &str, #[case] expected: TaskStatus) {
        let cli = parse(&["update", "1", "--status", token]).unwrap();
        assert_eq!(
            cli.command,
            Command::Update {
                index: 1,
                description: None,
                status: Some(expected),
            }
        );
    }

    #[test]
    fn update_rejects_unknown_status() {
        assert!(parse(&["update", "1", "--status", "banana"]).is_err());
    }

    #[test]
    fn negative_index_is_rejected() {
        assert!(parse(&["remove", "-1"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(parse(&[]).is_err());
    }
}
