//! Command dispatcher: one parsed command, one service call, one report.

use std::io::Write;

use log::debug;
use whattodo_core::{AppError, BoardService, BoardStore, Clock, TaskUpdate};

use crate::cli::Command;
use crate::error::CliError;
use crate::prompt::Confirm;

/// Runs `command` against `service`, writing user output to `out`.
///
/// Destructive commands (`create` over an existing board, `remove`, `clean`)
/// ask `confirm` first; a declined prompt prints `Aborted.` and changes nothing.
pub fn execute<S, C>(
    command: Command,
    service: &BoardService<S, C>,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<(), CliError>
where
    S: BoardStore,
    C: Clock,
{
    debug!("event=command_start command={command:?}");
    match command {
        Command::Create { name } => {
            if service.has_board()? {
                let current = service.load_board().map(|b| b.name().to_string());
                let question = match current {
                    Ok(current) => format!("Board \"{current}\" already exists. Replace it?"),
                    Err(_) => "A board file already exists. Replace it?".to_string(),
                };
                if !confirm.confirm(&question)? {
                    return aborted(out);
                }
            }
            let board = service.create_board(&name)?;
            writeln!(out, "Board \"{}\" created.", board.name())?;
        }
        Command::Add { description } => {
            let (index, task) = service.add_task(&description)?;
            writeln!(out, "Task {index} added: {task}")?;
        }
        Command::Update {
            index,
            description,
            status,
        } => {
            let task = service.update_task(index, TaskUpdate { description, status })?;
            writeln!(out, "Task {index} updated: {task}")?;
        }
        Command::Remove { index } => {
            let board = service.load_board()?;
            let task = board.retrieve_task(index).map_err(AppError::from)?;
            if !confirm.confirm(&format!("Remove task {index} \"{}\"?", task.description()))? {
                return aborted(out);
            }
            let removed = service.remove_task(index)?;
            writeln!(out, "Task {index} removed: {removed}")?;
        }
        Command::Clean => {
            let board = service.load_board()?;
            let question = format!(
                "Remove all {} task(s) from \"{}\"?",
                board.count_tasks(),
                board.name()
            );
            if !confirm.confirm(&question)? {
                return aborted(out);
            }
            let removed = service.clean_tasks()?;
            writeln!(out, "Removed {removed} task(s).")?;
        }
        Command::List => {
            write!(out, "{}", service.list_tasks()?)?;
        }
        Command::Count => {
            writeln!(out, "{}", service.count_tasks()?)?;
        }
    }
    Ok(())
}

fn aborted(out: &mut dyn Write) -> Result<(), CliError> {
    debug!("event=command_aborted");
    writeln!(out, "Aborted.")?;
    Ok(())
}
