use std::io::Write;

use psush_core::{
    command::{Args, BuiltinCommand, CommandResult, Io},
    status,
};

use crate::utils;

/// Command name.
const NAME: &str = "echo";

/// Implementation for the "echo" built-in command.
///
/// Prints all arguments separated by a single space, followed by a newline.
/// Arguments are never interpreted as options.
#[derive(Clone)]
pub struct Echo;
impl BuiltinCommand for Echo {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match try_print_words(args.arguments, args.io) {
            Ok(_) => CommandResult::code(status::SUCCESS),
            Err(error) => {
                utils::exit_with_error(args.io, NAME, &error.to_string(), status::GENERAL_ERROR)
            }
        }
    }
}

/// Tries to print words to stdout.
fn try_print_words(words: &[String], io: &mut Io) -> std::io::Result<()> {
    writeln!(io.stdout, "{}", words.join(" "))?;

    // Output may be buffered by a redirection file.
    io.stdout.flush()
}
