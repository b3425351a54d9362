use std::io::Write;

use clap::Parser;
use psush_core::{
    command::{Args, BuiltinCommand, CommandResult, Io},
    status, Context,
};

use crate::utils;

/// Command name.
const NAME: &str = "history";

/// Print the most recent input lines, oldest first.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[command(name = NAME, version)]
struct HistoryOpts {}

/// Implementation for the "history" built-in command.
#[derive(Clone)]
pub struct History;
impl BuiltinCommand for History {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        if let Err(error) = HistoryOpts::try_parse_from(utils::command_line(NAME, args.arguments)) {
            return utils::exit_with_parse_error(args.io, error);
        }

        match print_history(args.context, args.io) {
            Ok(_) => CommandResult::code(status::SUCCESS),
            Err(error) => {
                utils::exit_with_error(args.io, NAME, &error.to_string(), status::GENERAL_ERROR)
            }
        }
    }
}

/// Prints history entries numbered from 1.
fn print_history(context: &Context, io: &mut Io) -> std::io::Result<()> {
    for (index, line) in context.history.iter().enumerate() {
        writeln!(io.stdout, "{} {}", index + 1, line)?;
    }
    io.stdout.flush()
}
