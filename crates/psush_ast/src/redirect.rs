use std::fmt;

/// Describes where a command reads its input from or writes its output to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// Inherit the shell's own stream.
    #[default]
    None,

    /// Use a named file.
    File,

    /// Use a pipe connected to a neighbouring command.
    Pipe,
}

impl fmt::Display for RedirectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectMode::None => write!(f, "redirect none"),
            RedirectMode::File => write!(f, "redirect file"),
            RedirectMode::Pipe => write!(f, "redirect pipe"),
        }
    }
}
