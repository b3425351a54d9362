use psush_core::{
    command::{Action, Args, BuiltinCommand, CommandResult},
    status,
};

/// Requests that the interpreter terminates successfully.
fn request_exit() -> CommandResult {
    CommandResult::with_actions(status::SUCCESS, vec![Action::Exit(status::SUCCESS)])
}

/// Implementation for the "bye" built-in command.
///
/// Arguments are ignored.
#[derive(Clone)]
pub struct Bye;
impl BuiltinCommand for Bye {
    fn name(&self) -> &str {
        "bye"
    }

    fn run(&self, _: Args) -> CommandResult {
        request_exit()
    }
}

/// Implementation for the "exit" built-in command. Behaves like "bye".
#[derive(Clone)]
pub struct Exit;
impl BuiltinCommand for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn run(&self, _: Args) -> CommandResult {
        request_exit()
    }
}
