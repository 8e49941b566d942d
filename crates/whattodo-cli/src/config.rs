//! Runtime configuration handed to the command layer.

use std::path::PathBuf;

use crate::cli::Cli;

/// Settings for one invocation, derived from the arguments (and the
/// `WHATTODO_FILE` environment variable through clap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub verbose: bool,
    pub assume_yes: bool,
}

impl Config {
    /// flexi_logger spec: `debug` when verbose, `warn` otherwise.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            data_file: cli.file.clone(),
            verbose: cli.verbose,
            assume_yes: cli.yes,
        }
    }
}
