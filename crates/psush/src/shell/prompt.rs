use std::env;

use psush_core::utils::path_to_string;

/// Shell name shown on the first prompt line.
const PROMPT_NAME: &str = "psush";

/// Placeholder for values that cannot be determined.
const UNKNOWN: &str = "?";

/// Renders the two-line prompt:
///
/// ```text
///  psush /current/directory
/// user@host #
/// ```
pub(crate) fn render() -> String {
    let cwd = env::current_dir()
        .map(|path| path_to_string(&path))
        .unwrap_or_else(|_| UNKNOWN.to_owned());
    format_prompt(&cwd, &user_name(), &host_name())
}

fn format_prompt(cwd: &str, user: &str, host: &str) -> String {
    format!(" {} {}\n{}@{} # ", PROMPT_NAME, cwd, user, host)
}

fn user_name() -> String {
    env::var("LOGNAME")
        .or_else(|_| env::var("USER"))
        .unwrap_or_else(|_| UNKNOWN.to_owned())
}

fn host_name() -> String {
    nix::unistd::gethostname()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|_| UNKNOWN.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_has_two_lines() {
        assert_eq!(
            format_prompt("/tmp", "alice", "box"),
            " psush /tmp\nalice@box # "
        );
    }
}
