mod error;
mod executor;
mod interrupt;
mod report;
mod spawn;
mod wait;

pub use error::{ExecError, ExecResult};
pub use executor::Executor;
pub use interrupt::InterruptBridge;
pub use report::{ExecReport, ProcessStatus, SegmentReport};
