use super::{args::Args, CommandResult};

/// A command that is executed inside the interpreter process.
pub trait BuiltinCommand: CommandClone + Send + Sync {
    /// Returns the command's name.
    fn name(&self) -> &str;

    /// Runs the command.
    fn run(&self, args: Args) -> CommandResult;
}

/// Helper trait for making it easier to clone `Box<BuiltinCommand>`.
pub trait CommandClone {
    fn clone_box(&self) -> Box<dyn BuiltinCommand>;
}

impl<T> CommandClone for T
where
    T: 'static + BuiltinCommand + Clone,
{
    fn clone_box(&self) -> Box<dyn BuiltinCommand> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn BuiltinCommand> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
