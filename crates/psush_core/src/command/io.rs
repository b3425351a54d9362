use std::io;

/// Input/output wrapper for built-in commands.
///
/// Holds handles for standard input, standard output and standard error. The
/// handles do not need to be the interpreter's own streams; output may for
/// example be redirected to a file.
///
/// # Examples
///
/// Output can be written using the standard [`write!`] and [`writeln!`] macros.
/// ```
/// use std::io::Write;
/// use psush_core::command::Io;
///
/// let mut io = Io::inherit();
/// writeln!(io.stdout, "This line is printed to standard output.").unwrap();
/// writeln!(io.stderr, "This line is printed to standard error.").unwrap();
/// ```
pub struct Io {
    /// Standard input.
    pub stdin: Box<dyn io::Read + Send>,
    /// Standard output.
    pub stdout: Box<dyn io::Write + Send>,
    /// Standard error.
    pub stderr: Box<dyn io::Write + Send>,
}

impl Io {
    /// Constructs a new input/output wrapper for a command.
    pub fn new(
        stdin: Box<dyn io::Read + Send>,
        stdout: Box<dyn io::Write + Send>,
        stderr: Box<dyn io::Write + Send>,
    ) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
        }
    }

    /// Constructs a wrapper around the interpreter's own standard streams.
    pub fn inherit() -> Self {
        Self::new(
            Box::new(io::stdin()),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }
}
