use std::{env, io::Write, path::PathBuf};

use clap::Parser;
use log::debug;
use psush_core::{
    command::{Args, BuiltinCommand, CommandResult, Io},
    status,
    utils::{home_dir, path_to_string},
};

use crate::utils;

/// Implementation for the "cd" built-in command.
///
/// Changes the interpreter's working directory, which is inherited by every
/// process launched afterwards. Without arguments, the home directory is used.
/// Arguments after the first are ignored.
#[derive(Clone)]
pub struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn run(&self, args: Args) -> CommandResult {
        let path = match args.arguments {
            [] => match home_dir() {
                Some(home) => home,
                None => {
                    return utils::exit_with_error(
                        args.io,
                        "cd",
                        "HOME not set",
                        status::GENERAL_ERROR,
                    )
                }
            },
            [target, ..] => PathBuf::from(target),
        };

        match env::set_current_dir(&path) {
            Ok(_) => {
                debug!("changed working directory to {}", path.display());
                CommandResult::code(status::SUCCESS)
            }
            Err(error) => utils::exit_with_error(
                args.io,
                "cd",
                &format!("{}: {}", path_to_string(&path), error),
                status::GENERAL_ERROR,
            ),
        }
    }
}

/// Print the current working directory.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[command(version)]
struct WorkingDirectoryOpts {}

/// Prints the current working directory, optionally with a prefix.
fn print_working_directory(name: &str, prefix: &str, args: Args) -> CommandResult {
    if let Err(error) = WorkingDirectoryOpts::try_parse_from(utils::command_line(name, args.arguments))
    {
        return utils::exit_with_parse_error(args.io, error);
    }

    match try_print_working_directory(prefix, args.io) {
        Ok(_) => CommandResult::code(status::SUCCESS),
        Err(error) => utils::exit_with_error(
            args.io,
            name,
            &format!("could not print working directory: {}", error),
            status::GENERAL_ERROR,
        ),
    }
}

fn try_print_working_directory(prefix: &str, io: &mut Io) -> std::io::Result<()> {
    let path = env::current_dir()?;
    writeln!(io.stdout, "{}{}", prefix, path_to_string(&path))?;
    io.stdout.flush()
}

/// Implementation for the "cwd" built-in command.
///
/// Prints the working directory as ` cwd: <path>`.
#[derive(Clone)]
pub struct Cwd;

impl BuiltinCommand for Cwd {
    fn name(&self) -> &str {
        "cwd"
    }

    fn run(&self, args: Args) -> CommandResult {
        print_working_directory("cwd", " cwd: ", args)
    }
}

/// Implementation for the "pwd" built-in command.
#[derive(Clone)]
pub struct Pwd;

impl BuiltinCommand for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn run(&self, args: Args) -> CommandResult {
        print_working_directory("pwd", "", args)
    }
}

#[cfg(test)]
mod tests {
    use psush_core::Context;

    use crate::utils::{arguments, file_contents, mock_io};

    use super::*;

    // Tests that change the working directory live in tests/working_directory.rs.

    #[test]
    fn cd_reports_missing_directories() {
        let mut ctx = Context::default();
        let (mut io, _, mut stderr) = mock_io();
        let arguments = arguments(&["/definitely/not/a/directory"]);

        let result = Cd {}.run(Args::new(&mut ctx, &mut io, &arguments));

        assert_eq!(result.code, status::GENERAL_ERROR);
        assert!(result.actions.is_empty());
        assert!(file_contents(&mut stderr).starts_with("cd: /definitely/not/a/directory: "));
    }

    #[test]
    fn pwd_prints_the_working_directory() {
        let mut ctx = Context::default();
        let (mut io, mut stdout, _) = mock_io();
        let expected = path_to_string(&env::current_dir().unwrap());

        let result = Pwd {}.run(Args::new(&mut ctx, &mut io, &[]));

        assert_eq!(result.code, 0);
        assert_eq!(file_contents(&mut stdout), format!("{}\n", expected));
    }

    #[test]
    fn cwd_prints_the_working_directory_with_a_prefix() {
        let mut ctx = Context::default();
        let (mut io, mut stdout, _) = mock_io();
        let expected = path_to_string(&env::current_dir().unwrap());

        let result = Cwd {}.run(Args::new(&mut ctx, &mut io, &[]));

        assert_eq!(result.code, 0);
        assert_eq!(file_contents(&mut stdout), format!(" cwd: {}\n", expected));
    }

    #[test]
    fn pwd_prints_help_to_stdout() {
        let mut ctx = Context::default();
        let (mut io, mut stdout, _) = mock_io();
        let arguments = arguments(&["--help"]);

        let result = Pwd {}.run(Args::new(&mut ctx, &mut io, &arguments));

        assert_eq!(result.code, 0);
        assert!(file_contents(&mut stdout).contains("pwd"));
    }
}
