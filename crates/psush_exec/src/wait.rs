use log::{trace, warn};
use nix::{
    errno::Errno,
    sys::wait::{waitpid, WaitStatus},
    unistd::Pid,
};

use crate::{ExecError, ExecResult, ProcessStatus};

/// Retries a system call until it is not interrupted by a signal.
pub(crate) fn retry_interrupted<F, T>(f: F) -> nix::Result<T>
where
    F: Fn() -> nix::Result<T>,
{
    loop {
        match f() {
            Err(Errno::EINTR) => (),
            result => return result,
        }
    }
}

/// Blocks until a specific child process terminates.
///
/// Stop and continue notifications are skipped. A process that no longer
/// exists is reported as [`ProcessStatus::Lost`] rather than waited on.
pub(crate) fn wait_for(pid: Pid) -> ExecResult<ProcessStatus> {
    loop {
        match retry_interrupted(|| waitpid(pid, None)) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(ProcessStatus::Exited(code)),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Ok(ProcessStatus::Signaled(signal)),
            Ok(status) => trace!("ignoring wait status {:?}", status),
            Err(Errno::ECHILD) => {
                warn!("process {} was already reaped", pid);
                return Ok(ProcessStatus::Lost);
            }
            Err(error) => return Err(ExecError::WaitFailed(pid, error)),
        }
    }
}
