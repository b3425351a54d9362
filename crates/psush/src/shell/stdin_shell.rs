use std::io::{self, BufRead, Write};

use super::{Shell, ShellInput};

/// A shell that reads lines from a non-terminal standard input.
///
/// A prompt is still printed when standard output is a terminal.
pub(crate) struct StdinShell {
    show_prompt: bool,
}

impl StdinShell {
    pub fn new() -> Self {
        Self {
            show_prompt: atty::is(atty::Stream::Stdout),
        }
    }
}

impl Shell for StdinShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        if !prompt.is_empty() {
            print!("{}", prompt);
            let _ = io::stdout().flush();
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => ShellInput::Logout,
            Ok(_) => ShellInput::Line(line),
            Err(error) => {
                eprintln!("psush: could not read input: {}", error);
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        self.show_prompt
    }

    fn add_history_entry(&mut self, _line: &str) {}
}
