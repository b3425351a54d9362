use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
};

use nix::unistd::Pid;

/// Raw value stored while no child is in the foreground.
const NO_PROCESS: i32 = 0;

/// Shared marker for the child process the interpreter is currently waiting on.
///
/// Clones share the same marker, so a signal handling thread can observe the
/// process that the main thread waits for.
#[derive(Debug, Clone, Default)]
pub struct Foreground {
    pid: Arc<AtomicI32>,
}

impl Foreground {
    /// Returns the current foreground process, if any.
    pub fn current(&self) -> Option<Pid> {
        match self.pid.load(Ordering::SeqCst) {
            NO_PROCESS => None,
            raw => Some(Pid::from_raw(raw)),
        }
    }

    /// Marks a process as the foreground process until the returned guard is
    /// dropped.
    pub fn track(&self, pid: Pid) -> ForegroundGuard<'_> {
        self.pid.store(pid.as_raw(), Ordering::SeqCst);
        ForegroundGuard { foreground: self }
    }
}

/// Clears the foreground marker when dropped.
#[must_use = "the foreground marker is cleared as soon as the guard is dropped"]
pub struct ForegroundGuard<'a> {
    foreground: &'a Foreground,
}

impl Drop for ForegroundGuard<'_> {
    fn drop(&mut self) {
        self.foreground.pid.store(NO_PROCESS, Ordering::SeqCst);
    }
}
