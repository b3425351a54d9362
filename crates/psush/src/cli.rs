use std::ffi::OsString;

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    ArgAction, Parser,
};

/// Command line options for the application's CLI.
#[derive(Debug, Default, Parser)]
#[command(name = "psush", version, about = "A small shell for running command pipelines.")]
pub(crate) struct Opts {
    /// Print each parsed pipeline before running it. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command line arguments.
///
/// Unknown arguments are reported and dropped, and parsing is retried without
/// them. Help and version requests exit the process.
pub(crate) fn parse_args<I, T>(args: I) -> Opts
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    loop {
        match Opts::try_parse_from(&args) {
            Ok(opts) => {
                if opts.verbose > 0 {
                    eprintln!("verbose: verbose option selected: {}", opts.verbose);
                }
                return opts;
            }
            Err(error) if error.kind() == ErrorKind::UnknownArgument => {
                eprintln!("*** Unknown option used, ignoring. ***");
                match unknown_argument_index(&args, &error) {
                    Some(index) => {
                        args.remove(index);
                    }
                    None => return Opts::default(),
                }
            }
            Err(error) => error.exit(),
        }
    }
}

/// Returns the index of the argument that clap rejected.
///
/// Unknown short flags may be grouped with known ones (as in `-vx`), in which
/// case the whole group is dropped.
fn unknown_argument_index(args: &[OsString], error: &clap::Error) -> Option<usize> {
    let Some(ContextValue::String(invalid)) = error.get(ContextKind::InvalidArg) else {
        return None;
    };

    let exact = args.iter().skip(1).position(|arg| arg == invalid.as_str());
    let grouped = || {
        let flag = invalid.trim_start_matches('-');
        args.iter().skip(1).position(|arg| {
            let arg = arg.to_string_lossy();
            arg.starts_with('-') && !arg.starts_with("--") && arg.contains(flag)
        })
    };

    exact.or_else(grouped).map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_counted() {
        assert_eq!(parse_args(["psush"]).verbose, 0);
        assert_eq!(parse_args(["psush", "-v"]).verbose, 1);
        assert_eq!(parse_args(["psush", "-vv", "--verbose"]).verbose, 3);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        assert_eq!(parse_args(["psush", "-x", "-v"]).verbose, 1);
        assert_eq!(parse_args(["psush", "--bogus"]).verbose, 0);
        assert_eq!(parse_args(["psush", "-v", "script", "-v"]).verbose, 2);
    }
}
