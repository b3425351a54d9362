use std::fmt;

use crate::Command;

/// An ordered sequence of commands, where each command's output feeds the
/// next command's input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub commands: Vec<Command>,
}

impl Pipeline {
    /// Returns the number of segments in the pipeline, including empty ones.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns an iterator over all segments that name a command.
    pub fn runnable(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|command| !command.is_empty())
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
