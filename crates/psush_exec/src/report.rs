use nix::{sys::signal::Signal, unistd::Pid};

/// How a launched child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// The process exited normally with a status code.
    Exited(i32),

    /// The process was terminated by a signal.
    Signaled(Signal),

    /// The process had already been reaped elsewhere.
    Lost,
}

impl ProcessStatus {
    /// Returns a shell-style exit code. Signal deaths map to `128 + signal`.
    pub fn code(&self) -> Option<i32> {
        match self {
            ProcessStatus::Exited(code) => Some(*code),
            ProcessStatus::Signaled(signal) => Some(128 + *signal as i32),
            ProcessStatus::Lost => None,
        }
    }
}

/// Outcome of a single launched pipeline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentReport {
    /// Position of the segment within its pipeline.
    pub position: usize,
    pub pid: Pid,
    pub status: ProcessStatus,
}

/// Everything observable about one executed pipeline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExecReport {
    /// Launched segments in pipeline order. Empty for built-ins and for
    /// pipelines without commands.
    pub segments: Vec<SegmentReport>,

    /// Number of pipe pairs created.
    pub pipes_created: usize,

    /// Exit code of an in-process built-in command.
    pub builtin_code: Option<i32>,

    /// Exit code requested by a built-in command that terminates the
    /// interpreter.
    pub exit_request: Option<i32>,
}

impl ExecReport {
    /// Constructs a report for a built-in command.
    pub fn builtin(code: i32, exit_request: Option<i32>) -> Self {
        Self {
            builtin_code: Some(code),
            exit_request,
            ..Default::default()
        }
    }

    /// Returns the pipeline's exit code: that of the built-in, or of the last
    /// launched segment.
    pub fn exit_code(&self) -> Option<i32> {
        self.builtin_code
            .or_else(|| self.segments.last().and_then(|segment| segment.status.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_uses_the_last_segment_exit_code() {
        let report = ExecReport {
            segments: vec![
                SegmentReport {
                    position: 0,
                    pid: Pid::from_raw(10),
                    status: ProcessStatus::Exited(1),
                },
                SegmentReport {
                    position: 1,
                    pid: Pid::from_raw(11),
                    status: ProcessStatus::Signaled(Signal::SIGINT),
                },
            ],
            pipes_created: 1,
            ..Default::default()
        };
        assert_eq!(report.exit_code(), Some(130));
    }

    #[test]
    fn it_prefers_builtin_exit_codes() {
        assert_eq!(ExecReport::builtin(2, None).exit_code(), Some(2));
        assert_eq!(ExecReport::default().exit_code(), None);
    }
}
