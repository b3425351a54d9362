use crate::{command::Io, Context};

/// Arguments that can be passed to a built-in command.
pub struct Args<'a> {
    /// Interpreter state that the command may inspect or modify.
    pub context: &'a mut Context,
    /// File descriptors that the command can use for input and output.
    pub io: &'a mut Io,
    /// Command arguments, excluding the command name.
    pub arguments: &'a [String],
}

impl<'a> Args<'a> {
    pub fn new(context: &'a mut Context, io: &'a mut Io, arguments: &'a [String]) -> Self {
        Self {
            context,
            io,
            arguments,
        }
    }
}
