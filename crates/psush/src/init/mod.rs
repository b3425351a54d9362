mod context;
mod logging;

pub(crate) use context::initialized_context;
pub(crate) use logging::init_logging;
