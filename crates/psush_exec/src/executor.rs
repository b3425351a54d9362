use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    os::unix::fs::OpenOptionsExt,
};

use log::{debug, info};
use psush_ast::{Command, Pipeline};
use psush_core::{
    command::{Args, BuiltinCommand, Io},
    status, Context,
};

use crate::{spawn, ExecReport, ExecResult};

/// An executor is responsible for running parsed pipelines.
///
/// A pipeline consisting of a single built-in command runs inside the
/// interpreter process. Everything else is launched as a chain of child
/// processes, including built-in names that appear in longer pipelines.
#[derive(Debug, Default, Clone)]
pub struct Executor;

impl Executor {
    /// Executes a pipeline and blocks until all of its processes have ended.
    ///
    /// The pipeline's exit code is registered in the context. Notices about
    /// interrupted children are printed to standard output.
    pub fn execute(&self, pipeline: &Pipeline, context: &mut Context) -> ExecResult<ExecReport> {
        self.execute_with_notices(pipeline, context, &mut io::stdout())
    }

    /// Executes a pipeline like [`Executor::execute`], writing notices about
    /// interrupted children to `notices`.
    pub fn execute_with_notices(
        &self,
        pipeline: &Pipeline,
        context: &mut Context,
        notices: &mut dyn Write,
    ) -> ExecResult<ExecReport> {
        if let [command] = pipeline.commands.as_slice() {
            if command.is_empty() {
                return Ok(ExecReport::default());
            }

            if let Some(builtin) = context.get_builtin(&command.name).map(|b| b.clone_box()) {
                return Ok(self.call_builtin(builtin.as_ref(), command, context));
            }
        }

        let report = spawn::run_pipeline(pipeline, context.foreground(), notices)?;
        info!(
            "pipeline of {} commands finished with {:?}",
            report.segments.len(),
            report.exit_code()
        );
        if let Some(code) = report.exit_code() {
            context.register_exit(code);
        }

        Ok(report)
    }

    /// Runs a built-in command in-process.
    ///
    /// Redirection files replace the command's standard input and output. A
    /// file that cannot be opened fails the command with
    /// [`status::REDIRECT_FAILURE`].
    fn call_builtin(
        &self,
        builtin: &dyn BuiltinCommand,
        command: &Command,
        context: &mut Context,
    ) -> ExecReport {
        debug!("calling built-in {}", builtin.name());

        let mut io = Io::inherit();
        if let Some(path) = &command.input_file {
            match File::open(path) {
                Ok(file) => io.stdin = Box::new(file),
                Err(error) => return redirect_failure(context, path, "input", error),
            }
        }
        if let Some(path) = &command.output_file {
            match create_output_file(path) {
                Ok(file) => io.stdout = Box::new(file),
                Err(error) => return redirect_failure(context, path, "output", error),
            }
        }

        let result = builtin.run(Args::new(context, &mut io, &command.arguments));
        context.register_exit(result.code);

        ExecReport::builtin(result.code, result.exit_request())
    }
}

/// Reports a redirection file that could not be opened for a built-in.
fn redirect_failure(
    context: &mut Context,
    path: &str,
    direction: &str,
    error: io::Error,
) -> ExecReport {
    eprintln!("psush: {}: {} redirection failed: {}", path, direction, error);
    context.register_exit(status::REDIRECT_FAILURE);
    ExecReport::builtin(status::REDIRECT_FAILURE, None)
}

/// Opens a file for output redirection, creating or truncating it.
fn create_output_file(path: &str) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}
