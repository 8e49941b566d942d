mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod prompt;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use whattodo_core::{BoardService, JsonFileStore, SystemClock};

use cli::{Cli, Command};
use config::Config;
use error::CliError;
use prompt::{AssumeYes, TerminalPrompt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    // Without a logger the command still runs, just silently.
    let _logger = match logging::init_logging(config.log_level()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: failed to start logging: {err}");
            None
        }
    };

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("event=command_failed error={err:?}");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), CliError> {
    debug!(
        "event=cli_start data_file={} assume_yes={}",
        config.data_file.display(),
        config.assume_yes
    );
    let service = BoardService::new(JsonFileStore::new(&config.data_file), SystemClock);
    let mut out = io::stdout().lock();

    if config.assume_yes {
        commands::execute(command, &service, &mut AssumeYes, &mut out)
    } else {
        commands::execute(command, &service, &mut TerminalPrompt::stdin(), &mut out)
    }
}
