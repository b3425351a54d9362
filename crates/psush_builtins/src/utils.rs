use std::io::Write;

use psush_core::{
    command::{CommandResult, Io},
    status,
};

/// Prints a [`clap::Error`] message to standard out or standard error depending
/// on the error type.
///
/// Clap returns help messages as errors, so this function handles IO writing
/// accordingly.
pub fn exit_with_parse_error(io: &mut Io, error: clap::Error) -> CommandResult {
    // Printing help or version information is not an error.
    let (fd, code) = match error.use_stderr() {
        true => (&mut io.stderr, status::BUILTIN_ERROR),
        false => (&mut io.stdout, status::SUCCESS),
    };

    let _ = write!(fd, "{}", error);
    CommandResult::code(code)
}

/// Writes a prefixed error message to standard error and returns a status code.
pub fn exit_with_error(io: &mut Io, name: &str, message: &str, code: i32) -> CommandResult {
    let _ = writeln!(io.stderr, "{}: {}", name, message);
    CommandResult::code(code)
}

/// Returns a command line suitable for clap: the name followed by arguments.
pub fn command_line<'a>(name: &'a str, arguments: &'a [String]) -> impl Iterator<Item = &'a str> {
    std::iter::once(name).chain(arguments.iter().map(String::as_str))
}

/// Constructs a new no-op input/output wrapper for a command.
#[cfg(test)]
pub(crate) fn empty_io() -> Io {
    Io::new(
        Box::new(std::io::empty()),
        Box::new(std::io::sink()),
        Box::new(std::io::sink()),
    )
}

/// Constructs a new Io instance backed by temporary files.
#[cfg(test)]
pub(crate) fn mock_io() -> (Io, std::fs::File, std::fs::File) {
    use tempfile::tempfile;

    let stdout = tempfile().unwrap();
    let stderr = tempfile().unwrap();
    let io = Io::new(
        Box::new(std::io::empty()),
        Box::new(stdout.try_clone().unwrap()),
        Box::new(stderr.try_clone().unwrap()),
    );
    (io, stdout, stderr)
}

/// Reads the entire contents of a file from start to end.
///
/// Note that this will change the current position in the file.
#[cfg(test)]
pub(crate) fn file_contents(file: &mut std::fs::File) -> String {
    use std::io::{Read, Seek};

    let mut string = String::new();
    let _ = file.rewind();
    let _ = file.read_to_string(&mut string);
    string
}

/// Converts string slices into owned arguments.
#[cfg(test)]
pub(crate) fn arguments(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}
