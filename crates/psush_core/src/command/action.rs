type ExitCode = i32;

/// Represents an action that should be performed by the shell.
///
/// Actions allow built-in commands to request things that only the main loop
/// can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Terminate the interpreter with an exit code.
    Exit(ExitCode),
}
