use std::{
    ffi::{CStr, CString},
    io::Write,
    os::unix::io::{AsRawFd, RawFd},
};

use log::debug;
use nix::{
    fcntl::{open, OFlag},
    libc,
    sys::{
        signal::{signal, SigHandler, Signal},
        stat::Mode,
    },
    unistd::{close, dup2, execvp, fork, write, ForkResult, Pid},
};
use os_pipe::{PipeReader, PipeWriter};
use psush_ast::{Command, Pipeline, RedirectMode};
use psush_core::{status, Foreground};

use crate::{
    wait::{retry_interrupted, wait_for},
    ExecError, ExecReport, ExecResult, ProcessStatus, SegmentReport,
};

/// Permission bits for files created by output redirection.
const CREATE_MODE: libc::mode_t = 0o644;

/// A pipeline segment converted into the form required by `execvp`.
///
/// Everything a child needs is prepared before forking, so that the child
/// performs no fallible conversions.
struct Stage {
    position: usize,
    argv: Vec<CString>,
    input_file: Option<CString>,
    output_file: Option<CString>,
    not_found: Vec<u8>,
}

impl Stage {
    fn prepare(command: &Command) -> ExecResult<Self> {
        let argv = command
            .argv()
            .map(c_string)
            .collect::<ExecResult<Vec<_>>>()?;

        Ok(Self {
            position: command.position,
            argv,
            input_file: file_path(command.input_mode, command.input_file.as_deref())?,
            output_file: file_path(command.output_mode, command.output_file.as_deref())?,
            not_found: format!("{}: command not found\n", command.name).into_bytes(),
        })
    }

    fn program(&self) -> &CStr {
        &self.argv[0]
    }
}

fn c_string(word: &str) -> ExecResult<CString> {
    CString::new(word).map_err(|_| ExecError::InvalidArgument(word.to_owned()))
}

fn file_path(mode: RedirectMode, path: Option<&str>) -> ExecResult<Option<CString>> {
    match (mode, path) {
        (RedirectMode::File, Some(path)) => c_string(path).map(Some),
        _ => Ok(None),
    }
}

/// Launches every non-empty segment of a pipeline, then waits for each child
/// in pipeline order.
///
/// Empty segments are skipped and their neighbours are connected directly.
/// While a child is waited on it is marked as the foreground process. Notices
/// about children killed by an interrupt are written to `notices`.
pub(crate) fn run_pipeline(
    pipeline: &Pipeline,
    foreground: &Foreground,
    notices: &mut dyn Write,
) -> ExecResult<ExecReport> {
    let stages = pipeline
        .runnable()
        .map(Stage::prepare)
        .collect::<ExecResult<Vec<_>>>()?;

    let mut report = ExecReport::default();
    let children = launch(&stages, &mut report)?;

    for (position, pid) in children {
        let status = {
            let _guard = foreground.track(pid);
            wait_for(pid)?
        };
        debug!("process {} at position {} ended: {:?}", pid, position, status);

        if status == ProcessStatus::Signaled(Signal::SIGINT) {
            let _ = writeln!(notices, "child killed");
            let _ = notices.flush();
        }

        report.segments.push(SegmentReport {
            position,
            pid,
            status,
        });
    }

    Ok(report)
}

/// Forks one child per stage, connecting adjacent stages with pipes.
///
/// When this returns, the parent holds no pipe descriptors.
fn launch(stages: &[Stage], report: &mut ExecReport) -> ExecResult<Vec<(usize, Pid)>> {
    let mut children = Vec::with_capacity(stages.len());
    let mut previous: Option<PipeReader> = None;

    for (index, stage) in stages.iter().enumerate() {
        let next = match index + 1 < stages.len() {
            true => {
                let pipe = os_pipe::pipe().map_err(ExecError::CreatePipeFailed)?;
                report.pipes_created += 1;
                Some(pipe)
            }
            false => None,
        };

        // Safety: the child only rewires descriptors before replacing its image.
        match unsafe { fork() }.map_err(ExecError::ForkFailed)? {
            ForkResult::Child => {
                let (reader, writer) = match next {
                    Some((reader, writer)) => (Some(reader), Some(writer)),
                    None => (None, None),
                };
                exec_stage(stage, previous, reader, writer)
            }
            ForkResult::Parent { child } => {
                debug!("launched {:?} as process {}", stage.program(), child);

                // The write end belongs to the child now. Keeping it open here
                // would stop the next reader from ever seeing end of file.
                previous = next.map(|(reader, _writer)| reader);
                children.push((stage.position, child));
            }
        }
    }

    Ok(children)
}

/// Rewires standard input and output of a forked child and replaces its
/// image. Never returns.
///
/// Only async-signal-safe calls are made here; diagnostics are written
/// straight to the standard error descriptor.
fn exec_stage(
    stage: &Stage,
    previous: Option<PipeReader>,
    next_reader: Option<PipeReader>,
    next_writer: Option<PipeWriter>,
) -> ! {
    // Safety: the default disposition has no handler state to corrupt.
    // SIGPIPE is ignored by the Rust runtime, and ignored signals survive exec.
    let _ = unsafe { signal(Signal::SIGINT, SigHandler::SigDfl) };
    let _ = unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) };

    drop(next_reader);

    match (&stage.input_file, &previous) {
        (Some(path), _) => redirect_file(path, OFlag::O_RDONLY, libc::STDIN_FILENO, b"input"),
        (None, Some(reader)) => duplicate(reader.as_raw_fd(), libc::STDIN_FILENO),
        (None, None) => {}
    }
    drop(previous);

    match (&stage.output_file, &next_writer) {
        (Some(path), _) => redirect_file(
            path,
            OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
            libc::STDOUT_FILENO,
            b"output",
        ),
        (None, Some(writer)) => duplicate(writer.as_raw_fd(), libc::STDOUT_FILENO),
        (None, None) => {}
    }
    drop(next_writer);

    let _ = execvp(stage.program(), &stage.argv);
    report(&[stage.not_found.as_slice()]);
    terminate(status::COMMAND_NOT_FOUND)
}

/// Opens a file and installs it as a standard descriptor, or terminates the
/// child with [`status::REDIRECT_FAILURE`].
fn redirect_file(path: &CStr, flags: OFlag, target: RawFd, direction: &[u8]) {
    let mode = Mode::from_bits_truncate(CREATE_MODE);
    let fd = match retry_interrupted(|| open(path, flags, mode)) {
        Ok(fd) => fd,
        Err(error) => {
            report(&[
                b"psush: ",
                path.to_bytes(),
                b": ",
                direction,
                b" redirection failed: ",
                error.desc().as_bytes(),
                b"\n",
            ]);
            terminate(status::REDIRECT_FAILURE)
        }
    };

    if fd != target {
        duplicate(fd, target);
        let _ = close(fd);
    }
}

fn duplicate(fd: RawFd, target: RawFd) {
    if let Err(error) = retry_interrupted(|| dup2(fd, target)) {
        report(&[
            b"psush: failed to duplicate descriptor: ",
            error.desc().as_bytes(),
            b"\n",
        ]);
        terminate(status::GENERAL_ERROR);
    }
}

fn report(parts: &[&[u8]]) {
    for part in parts {
        let _ = write(libc::STDERR_FILENO, part);
    }
}

fn terminate(code: i32) -> ! {
    // Safety: `_exit` skips destructors and stdio buffers owned by the parent.
    unsafe { libc::_exit(code) }
}
