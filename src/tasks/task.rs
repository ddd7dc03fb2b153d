use anyhow::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    /// The bridge had no handler for the requested method.
    NotImplemented,
}

impl TaskStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            TaskStatus::Completed => 0,
            TaskStatus::NotImplemented => 2,
        }
    }
}

/// A runnable unit of work that reports to `out`.
pub trait Task {
    fn run(&mut self, out: &mut dyn Write) -> Result<TaskStatus>;
}
