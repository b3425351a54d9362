mod cli;
mod error;
mod init;
mod shell;

#[cfg(test)]
mod tests;

use error::{ErrorHandler, GuidingErrorHandler, SimpleErrorHandler};
use log::debug;
use psush_core::{status, Context};
use psush_exec::{Executor, InterruptBridge};
use psush_parse::parse;
use shell::{prompt, Shell, ShellError, ShellInput, ShellResult};

/// Line that ends the main loop without being recorded in history.
const EXIT_KEYWORD: &str = "bye";

/// Entrypoint for the application.
pub fn main() {
    let opts = cli::parse_args(std::env::args_os());
    init::init_logging(opts.verbose);

    let mut context = init::initialized_context(opts.verbose);
    let bridge = match InterruptBridge::install(context.foreground().clone()) {
        Ok(bridge) => bridge,
        Err(error) => {
            eprintln!("psush: could not install interrupt handler: {error}");
            std::process::exit(status::GENERAL_ERROR);
        }
    };

    let code = match run_shell(shell::default_shell(), &mut context) {
        Ok(code) => code,
        Err(error) => {
            SimpleErrorHandler.display_error(error);
            status::GENERAL_ERROR
        }
    };

    drop(bridge);
    std::process::exit(code);
}

/// Main loop for running a [`Shell`].
///
/// Returns the interpreter's exit code when input ends or an exit is
/// requested, or an error that the shell cannot recover from.
fn run_shell(mut shell: Box<dyn Shell>, context: &mut Context) -> ShellResult<i32> {
    let executor = Executor::default();
    let error_handler: Box<dyn ErrorHandler> = match shell.is_interactive() {
        true => Box::new(GuidingErrorHandler),
        false => Box::new(SimpleErrorHandler),
    };

    loop {
        let prompt = match shell.is_interactive() {
            true => prompt::render(),
            false => String::new(),
        };

        let line = match shell.prompt_line(&prompt) {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::Logout | ShellInput::None => break,
        };

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        if line == EXIT_KEYWORD {
            debug!("exit keyword received");
            break;
        }

        context.history.push(line);
        shell.add_history_entry(line);

        match eval_line(line, context, &executor) {
            Ok(Some(code)) => return Ok(code),
            Ok(None) => (),
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => error_handler.display_error(error),
        }
    }

    Ok(status::SUCCESS)
}

/// Parses and executes a single line.
///
/// Returns an exit code if a built-in command requested termination.
fn eval_line(line: &str, context: &mut Context, executor: &Executor) -> ShellResult<Option<i32>> {
    let pipeline = parse(line).map_err(|error| ShellError::Parse(error, line.to_owned()))?;

    if context.is_verbose() {
        eprint!("{}", pipeline);
    }

    let report = executor.execute(&pipeline, context)?;
    Ok(report.exit_request)
}
