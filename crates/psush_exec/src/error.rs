use nix::unistd::Pid;
use thiserror::Error;

pub type ExecResult<T> = Result<T, ExecError>;

/// Errors raised by the interpreter process while executing a pipeline.
///
/// Failures inside a child process are never reported through this type.
/// They are written to the child's standard error and encoded in its exit
/// status instead.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to create pipe: {0}")]
    CreatePipeFailed(#[source] std::io::Error),

    #[error("failed to fork: {0}")]
    ForkFailed(#[source] nix::Error),

    #[error("failed to wait for process {0}: {1}")]
    WaitFailed(Pid, #[source] nix::Error),

    /// A word that cannot be passed to a program, such as one containing a
    /// NUL byte.
    #[error("invalid argument: {0:?}")]
    InvalidArgument(String),
}

impl ExecError {
    /// Returns `true` if the interpreter cannot reasonably continue.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ExecError::InvalidArgument(_))
    }
}
