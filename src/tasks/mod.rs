mod invoke_method;
mod task;
mod watch_memory;

pub use invoke_method::InvokeMethodTask;
pub use task::{Task, TaskStatus};
pub use watch_memory::WatchMemoryTask;
