use crate::memory::{FootprintSource, MemoryQueryError};

/// Behaves like a `task_info` call that returned a non-success status.
#[derive(Debug, Clone, Copy)]
pub struct FailingFootprint {
    pub status: i32,
}

impl FailingFootprint {
    pub fn new(status: i32) -> Self {
        Self { status }
    }
}

impl FootprintSource for FailingFootprint {
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
        Err(MemoryQueryError::OsQueryFailed {
            status: self.status,
        })
    }
}
