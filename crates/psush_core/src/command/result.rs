use super::Action;

/// Represents the result of executing a built-in command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code.
    ///
    /// Successful execution is typically represented by `0`.
    pub code: i32,

    /// Actions that should be taken by the shell after executing the command.
    pub actions: Vec<Action>,
}

impl CommandResult {
    /// Constructs a new `CommandResult` without any actions.
    pub fn code(code: i32) -> Self {
        Self {
            code,
            actions: Vec::new(),
        }
    }

    /// Constructs a new `CommandResult` with a code and some actions.
    pub fn with_actions(code: i32, actions: Vec<Action>) -> Self {
        Self { code, actions }
    }

    /// Returns the exit code requested by the command, if any.
    pub fn exit_request(&self) -> Option<i32> {
        self.actions.iter().find_map(|action| match action {
            Action::Exit(code) => Some(*code),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_finds_exit_requests() {
        assert_eq!(CommandResult::code(3).exit_request(), None);
        assert_eq!(
            CommandResult::with_actions(0, vec![Action::Exit(4)]).exit_request(),
            Some(4)
        );
    }
}
