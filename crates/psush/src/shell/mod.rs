pub(crate) mod interactive;
pub(crate) mod prompt;
pub(crate) mod stdin_shell;

#[cfg(test)]
use mockall::automock;

use log::warn;
use psush_exec::ExecError;
use psush_parse::ParseError;
use rustyline::error::ReadlineError;
use thiserror::Error;

use self::{interactive::RustylineShell, stdin_shell::StdinShell};

pub(crate) enum ShellInput {
    /// A line of input.
    Line(String),
    /// The user interrupted the prompt.
    Interrupt,
    /// Exit the shell.
    Logout,
    /// No input.
    None,
}

#[cfg_attr(test, automock)]
pub(crate) trait Shell {
    /// Prompts the user for a line of input.
    fn prompt_line(&mut self, prompt: &str) -> ShellInput;

    /// Returns `true` if a prompt should be shown to the user.
    fn is_interactive(&self) -> bool;

    /// Appends a line entry to the shell's own line-editing history.
    ///
    /// This feature is optional to implement, and may be a no-op.
    fn add_history_entry(&mut self, line: &str);
}

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    /// A line could not be parsed. Holds the offending line.
    #[error("{0}")]
    Parse(ParseError, String),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("line editor: {0}")]
    Readline(#[from] ReadlineError),
}

impl ShellError {
    /// Returns `true` if the shell cannot continue reading input.
    pub fn is_fatal(&self) -> bool {
        match self {
            ShellError::Parse(_, _) => false,
            ShellError::Exec(error) => error.is_fatal(),
            ShellError::Readline(_) => true,
        }
    }
}

pub(crate) type ShellResult<T> = Result<T, ShellError>;

/// Returns a line-editing shell if standard input is a terminal, and a plain
/// reader otherwise.
pub(crate) fn default_shell() -> Box<dyn Shell> {
    if !atty::is(atty::Stream::Stdin) {
        return Box::new(StdinShell::new());
    }

    match RustylineShell::new() {
        Ok(shell) => Box::new(shell),
        Err(error) => {
            warn!("falling back to plain input: {}", error);
            Box::new(StdinShell::new())
        }
    }
}
