use rustyline::{error::ReadlineError, DefaultEditor};

use super::{Shell, ShellInput, ShellResult};

/// An interactive shell that prompts the user for input using a line editor.
pub(crate) struct RustylineShell {
    editor: DefaultEditor,
}

impl RustylineShell {
    pub fn new() -> ShellResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        // The editor only handles the final prompt line.
        let prompt = match prompt.rsplit_once('\n') {
            Some((header, line)) => {
                println!("{}", header);
                line
            }
            None => prompt,
        };

        match self.editor.readline(prompt) {
            Ok(line) => ShellInput::Line(line),
            Err(ReadlineError::Interrupted) => ShellInput::Interrupt,
            Err(ReadlineError::Eof) => ShellInput::Logout,
            Err(error) => {
                eprintln!("psush: unhandled input: {}", error);
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn add_history_entry(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
