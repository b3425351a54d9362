pub mod command;
mod context;
mod foreground;
mod history;
pub mod status;
pub mod utils;

pub use context::Context;
pub use foreground::{Foreground, ForegroundGuard};
pub use history::{History, HISTORY_SIZE};
