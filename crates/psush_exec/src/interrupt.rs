use std::{io, thread};

use log::{debug, trace};
use nix::sys::signal::{kill, Signal};
use psush_core::Foreground;
use signal_hook::{
    consts::SIGINT,
    iterator::{Handle, Signals},
};

/// Forwards interrupts received by the interpreter to its foreground child.
///
/// Once installed, the interpreter itself is no longer terminated by
/// `SIGINT`. An interrupt that arrives while no child is in the foreground is
/// swallowed.
///
/// Dropping the bridge stops forwarding.
pub struct InterruptBridge {
    handle: Handle,
    thread: Option<thread::JoinHandle<()>>,
}

impl InterruptBridge {
    /// Installs the interrupt handler and starts the forwarding thread.
    pub fn install(foreground: Foreground) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT])?;
        let handle = signals.handle();

        let thread = thread::Builder::new()
            .name("interrupt-bridge".into())
            .spawn(move || {
                for _ in signals.forever() {
                    forward_interrupt(&foreground);
                }
            })?;

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for InterruptBridge {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn forward_interrupt(foreground: &Foreground) {
    match foreground.current() {
        Some(pid) => {
            debug!("forwarding interrupt to process {}", pid);
            if let Err(error) = kill(pid, Signal::SIGINT) {
                debug!("could not interrupt process {}: {}", pid, error);
            }
        }
        None => trace!("no foreground process, ignoring interrupt"),
    }
}
