mod echo;
mod exit;
mod fs;
mod history;
mod utils;

pub use echo::Echo;
pub use exit::{Bye, Exit};
pub use fs::{Cd, Cwd, Pwd};
pub use history::History;

use psush_core::command::BuiltinCommand;

/// Returns one instance of every built-in command.
pub fn all_builtins() -> Vec<Box<dyn BuiltinCommand>> {
    vec![
        Box::new(Bye {}),
        Box::new(Cd {}),
        Box::new(Cwd {}),
        Box::new(Echo {}),
        Box::new(Exit {}),
        Box::new(History {}),
        Box::new(Pwd {}),
    ]
}
