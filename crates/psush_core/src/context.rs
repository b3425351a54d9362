use std::collections::HashMap;

use crate::{command::BuiltinCommand, status, Foreground, History};

/// Interpreter state shared by the main loop, the execution engine and
/// built-in commands.
pub struct Context {
    /// Most recent input lines.
    pub history: History,

    builtins: HashMap<String, Box<dyn BuiltinCommand>>,
    foreground: Foreground,
    last_exit: i32,
    verbosity: u8,
}

impl Context {
    /// Constructs a new context without any built-in commands.
    pub fn new(verbosity: u8) -> Self {
        Self {
            history: History::default(),
            builtins: HashMap::new(),
            foreground: Foreground::default(),
            last_exit: status::SUCCESS,
            verbosity,
        }
    }

    /// Returns a built-in command by name.
    pub fn get_builtin(&self, name: &str) -> Option<&dyn BuiltinCommand> {
        self.builtins.get(name).map(Box::as_ref)
    }

    /// Registers a built-in command under its own name, replacing any earlier
    /// command with the same name.
    pub fn register_builtin(&mut self, builtin: Box<dyn BuiltinCommand>) {
        self.builtins.insert(builtin.name().to_owned(), builtin);
    }

    /// Returns the names of all built-in commands in sorted order.
    pub fn builtin_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builtins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the marker for the child process that is currently waited on.
    pub fn foreground(&self) -> &Foreground {
        &self.foreground
    }

    /// Returns the exit code of the last executed pipeline.
    pub fn last_exit(&self) -> i32 {
        self.last_exit
    }

    /// Registers the exit code of the last executed pipeline.
    pub fn register_exit(&mut self, code: i32) {
        self.last_exit = code;
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Returns `true` if parsed pipelines should be printed before execution.
    pub fn is_verbose(&self) -> bool {
        self.verbosity > 0
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(0)
    }
}
