mod command;
mod pipeline;
mod redirect;

pub use command::Command;
pub use pipeline::Pipeline;
pub use redirect::RedirectMode;
