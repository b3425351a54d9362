use std::fmt;

use crate::RedirectMode;

/// Placeholder printed for absent file names.
const NOT_AVAILABLE: &str = "<na>";

/// A command represents a single segment of a pipeline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Command {
    /// The segment text exactly as it appeared between pipe characters.
    pub raw_text: String,

    /// Name of the program or built-in to execute. Empty when the segment
    /// contains no words.
    pub name: String,

    /// Arguments following the name, with redirection operators and their
    /// targets removed.
    pub arguments: Vec<String>,

    /// Zero-based index of the command within its pipeline.
    pub position: usize,

    pub input_mode: RedirectMode,
    pub output_mode: RedirectMode,

    /// Input file. Only set when `input_mode` is [`RedirectMode::File`].
    pub input_file: Option<String>,

    /// Output file. Only set when `output_mode` is [`RedirectMode::File`].
    pub output_file: Option<String>,
}

impl Command {
    /// Constructs an empty command for a segment at a given pipeline position.
    pub fn new<S: Into<String>>(raw_text: S, position: usize) -> Self {
        Self {
            raw_text: raw_text.into(),
            position,
            ..Default::default()
        }
    }

    /// Appends an argument to the command.
    pub fn arg(&mut self, arg: String) {
        self.arguments.push(arg);
    }

    /// Reads input from a file. Replaces any earlier input file.
    pub fn redirect_input(&mut self, file: String) {
        self.input_mode = RedirectMode::File;
        self.input_file = Some(file);
    }

    /// Writes output to a file. Replaces any earlier output file.
    pub fn redirect_output(&mut self, file: String) {
        self.output_mode = RedirectMode::File;
        self.output_file = Some(file);
    }

    /// Returns `true` if the segment did not contain a command name.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns the argument vector passed to a program: the name followed by
    /// all arguments.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.arguments.iter().map(String::as_str))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "raw text: +{}+", self.raw_text)?;
        writeln!(f, "\tbase command: +{}+", self.name)?;
        writeln!(f, "\tparam count: {}", self.arguments.len())?;
        for (index, argument) in self.arguments.iter().enumerate() {
            writeln!(f, "\t\tparam {}: {}", index + 1, argument)?;
        }
        writeln!(f, "\tinput source: {}", self.input_mode)?;
        writeln!(f, "\toutput dest:  {}", self.output_mode)?;
        writeln!(f, "\tinput file name:  {}", self.input_file.as_deref().unwrap_or(NOT_AVAILABLE))?;
        writeln!(f, "\toutput file name: {}", self.output_file.as_deref().unwrap_or(NOT_AVAILABLE))?;
        writeln!(f, "\tlocation in list of commands: {}", self.position)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_replaces_earlier_redirects() {
        let mut command = Command::new("cat < a < b", 0);
        command.redirect_input("a".into());
        command.redirect_input("b".into());
        assert_eq!(command.input_mode, RedirectMode::File);
        assert_eq!(command.input_file.as_deref(), Some("b"));
    }

    #[test]
    fn it_builds_argv_from_name_and_arguments() {
        let mut command = Command::new("ls -l /", 0);
        command.name = "ls".into();
        command.arg("-l".into());
        command.arg("/".into());
        assert_eq!(command.argv().collect::<Vec<_>>(), vec!["ls", "-l", "/"]);
    }

    #[test]
    fn it_dumps_command_details() {
        let mut command = Command::new(" sort -r > out", 1);
        command.name = "sort".into();
        command.arg("-r".into());
        command.input_mode = RedirectMode::Pipe;
        command.redirect_output("out".into());

        assert_eq!(
            command.to_string(),
            "raw text: + sort -r > out+\n\
             \tbase command: +sort+\n\
             \tparam count: 1\n\
             \t\tparam 1: -r\n\
             \tinput source: redirect pipe\n\
             \toutput dest:  redirect file\n\
             \tinput file name:  <na>\n\
             \toutput file name: out\n\
             \tlocation in list of commands: 1\n\
             \n"
        );
    }
}
