use std::collections::VecDeque;

use crate::shell::{MockShell, ShellInput};

use super::*;

/// Constructs a non-interactive mock shell that returns lines in order, and
/// then logs out.
fn scripted_shell(inputs: Vec<ShellInput>) -> MockShell {
    let mut inputs = VecDeque::from(inputs);
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().returning(|| false);
    mock_shell.expect_add_history_entry().return_const(());
    mock_shell
        .expect_prompt_line()
        .returning(move |_| inputs.pop_front().unwrap_or(ShellInput::Logout));
    mock_shell
}

fn line(text: &str) -> ShellInput {
    ShellInput::Line(format!("{text}\n"))
}

fn history(context: &Context) -> Vec<&str> {
    context.history.iter().collect()
}

#[test]
fn shell_logout() {
    let mut context = init::initialized_context(0);
    let shell = scripted_shell(vec![]);

    assert_eq!(run_shell(Box::new(shell), &mut context).unwrap(), 0);
    assert!(context.history.is_empty());
}

#[test]
fn shell_interrupt_shows_a_new_prompt() {
    let mut context = init::initialized_context(0);
    let mut counter = 0;
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().returning(|| false);
    mock_shell
        .expect_prompt_line()
        .times(2)
        .returning(move |_| {
            counter += 1;
            if counter != 1 {
                ShellInput::Logout
            } else {
                ShellInput::Interrupt
            }
        });

    assert_eq!(run_shell(Box::new(mock_shell), &mut context).unwrap(), 0);
}

#[test]
fn shell_records_lines_before_parsing() {
    let mut context = init::initialized_context(0);
    let shell = scripted_shell(vec![line("echo hello"), line(""), line("cat <"), line("   ")]);

    assert_eq!(run_shell(Box::new(shell), &mut context).unwrap(), 0);
    assert_eq!(history(&context), vec!["echo hello", "cat <"]);
}

#[test]
fn shell_stops_at_exit_keyword() {
    let mut context = init::initialized_context(0);
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().returning(|| false);
    mock_shell
        .expect_prompt_line()
        .times(1)
        .returning(|_| ShellInput::Line(String::from("bye\n")));

    assert_eq!(run_shell(Box::new(mock_shell), &mut context).unwrap(), 0);
    assert!(context.history.is_empty());
}

#[test]
fn shell_stops_at_exit_builtin() {
    let mut context = init::initialized_context(0);
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().returning(|| false);
    mock_shell.expect_add_history_entry().times(1).return_const(());
    mock_shell
        .expect_prompt_line()
        .times(1)
        .returning(|_| ShellInput::Line(String::from("exit\n")));

    assert_eq!(run_shell(Box::new(mock_shell), &mut context).unwrap(), 0);
    assert_eq!(history(&context), vec!["exit"]);
}

#[test]
fn shell_continues_after_failed_commands() {
    let mut context = init::initialized_context(0);
    let shell = scripted_shell(vec![
        line("ls > /no/such/dir/file"),
        line("psush-test-no-such-program"),
        line("cd /no/such/dir"),
        line("echo still running"),
    ]);

    assert_eq!(run_shell(Box::new(shell), &mut context).unwrap(), 0);
    assert_eq!(context.history.len(), 4);
    assert_eq!(context.last_exit(), 0);
}
