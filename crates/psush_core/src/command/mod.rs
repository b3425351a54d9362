mod action;
mod args;
mod command_trait;
mod io;
mod result;

pub use action::Action;
pub use args::Args;
pub use command_trait::{BuiltinCommand, CommandClone};
pub use io::Io;
pub use result::CommandResult;
